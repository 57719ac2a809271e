//! Error types for the GoCardless API client.
//!
//! Every call returns [`Result`], whose error side covers transport failures,
//! unexpected HTTP statuses, malformed bodies, and the structured error object
//! the API places in its response envelope.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for GoCardless operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all GoCardless API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection, DNS or TLS failure while talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned a structured error in the response envelope
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Non-2xx response whose body carried no structured error
    #[error("Unexpected response: status={status}, body={body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, lossily decoded as UTF-8
        body: String,
    },

    /// A 2xx response whose envelope held neither an error nor the payload
    #[error("missing result")]
    MissingResult,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The per-call deadline elapsed
    #[error("Request timeout")]
    Timeout,
}

impl Error {
    /// Returns `true` if a failed attempt with this error may be retried.
    ///
    /// Every failure produced by an attempt is retryable: the API's error
    /// subkinds are not distinguished. Only faults detected before a request
    /// is sent, and an elapsed deadline, end the retry loop.
    ///
    /// # Example
    ///
    /// ```
    /// use gocardless_rs::Error;
    ///
    /// assert!(Error::MissingResult.is_retryable());
    /// assert!(!Error::Timeout.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) | Error::Timeout
        )
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api(err) => (400..500).contains(&err.code),
            Error::Status { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api(err) => err.code >= 500,
            Error::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The structured API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// A body carrying an `error` object yields [`Error::Api`], with `code`
    /// taken from `status` when the body omits it. Anything else becomes the
    /// generic [`Error::Status`].
    pub(crate) fn from_status_response(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ErrorEnvelope {
            error: Option<ApiError>,
        }

        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error: Some(mut err) }) => {
                if err.code == 0 {
                    err.code = status;
                }
                Error::Api(err)
            }
            _ => Error::Status {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}

/// The error object returned by the GoCardless API.
///
/// See <https://developer.gocardless.com/api-reference/#api-usage-errors>.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Human-readable summary
    #[serde(default)]
    pub message: String,
    /// Broad category of the failure
    #[serde(rename = "type", default)]
    pub error_type: ApiErrorType,
    /// HTTP status code the API associated with the error
    #[serde(default)]
    pub code: u16,
    /// Identifier to quote when contacting GoCardless support
    #[serde(default)]
    pub request_id: Option<String>,
    /// Link to the documentation for this error
    #[serde(default)]
    pub documentation_url: Option<String>,
    /// Individual problems, e.g. one per invalid field
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, code={})", self.message, self.error_type, self.code)?;
        if let Some(ref id) = self.request_id {
            write!(f, ", request_id={}", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Category of an [`ApiError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    /// Internal error on the GoCardless side
    Gocardless,
    /// The request was malformed or used the API incorrectly
    InvalidApiUsage,
    /// The resource is not in a state that allows the action
    InvalidState,
    /// One or more parameters failed validation
    ValidationFailed,
    /// A type this client does not know about, or none was sent
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorType::Gocardless => "gocardless",
            ApiErrorType::InvalidApiUsage => "invalid_api_usage",
            ApiErrorType::InvalidState => "invalid_state",
            ApiErrorType::ValidationFailed => "validation_failed",
            ApiErrorType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A single entry of [`ApiError::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Description of this problem
    #[serde(default)]
    pub message: String,
    /// Machine-readable reason
    #[serde(default)]
    pub reason: Option<String>,
    /// Offending field for validation errors
    #[serde(default)]
    pub field: Option<String>,
    /// JSON pointer into the request body
    #[serde(default)]
    pub request_pointer: Option<String>,
}
