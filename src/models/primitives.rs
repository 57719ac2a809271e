//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strongly-typed mandate import ID (e.g. `IM000010790WX1`).
///
/// # Example
///
/// ```
/// use gocardless_rs::MandateImportId;
///
/// let id = MandateImportId::new("IM000010790WX1");
/// println!("Import: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MandateImportId(String);

impl MandateImportId {
    /// Create a new mandate import ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MandateImportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MandateImportId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for MandateImportId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MandateImportId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// API version in `YYYY-MM-DD` format, sent as `GoCardless-Version`.
///
/// # Example
///
/// ```
/// use gocardless_rs::ApiVersion;
///
/// let version = ApiVersion::new("2015-07-06").expect("valid version");
/// assert_eq!(version, ApiVersion::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The version this client's models are written against.
    pub const DEFAULT: &'static str = "2015-07-06";

    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is not a `YYYY-MM-DD` date.
    pub fn new(version: &str) -> crate::Result<Self> {
        chrono::NaiveDate::parse_from_str(version, "%Y-%m-%d").map_err(|_| {
            crate::Error::InvalidInput(format!(
                "Invalid API version format: {}. Expected YYYY-MM-DD",
                version
            ))
        })?;

        // chrono accepts unpadded fields; the header must be exact
        if version.len() != 10 {
            return Err(crate::Error::InvalidInput(format!(
                "Invalid API version format: {}. Expected YYYY-MM-DD",
                version
            )));
        }

        Ok(ApiVersion(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Environment configuration for the GoCardless API.
///
/// # Example
///
/// ```
/// use gocardless_rs::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env.api_base_url(), "https://api-sandbox.gocardless.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live environment, moving real money.
    #[default]
    Live,
    /// Sandbox environment for integration testing.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Live => "https://api.gocardless.com",
            Environment::Sandbox => "https://api-sandbox.gocardless.com",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Environment::Live),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(crate::Error::Config(format!(
                "Unknown environment: {}. Expected live or sandbox",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}
