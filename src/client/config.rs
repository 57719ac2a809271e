//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{ApiVersion, Environment};

/// Name sent in `GoCardless-Client-Library` and `User-Agent`.
pub const CLIENT_LIBRARY: &str = "gocardless-rs";

/// Version sent in `GoCardless-Client-Version`.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `User-Agent`: library and compiler versions.
pub fn default_user_agent() -> String {
    format!(
        "{}/{} rust/{}",
        CLIENT_LIBRARY,
        CLIENT_VERSION,
        env!("GOCARDLESS_RUSTC_VERSION")
    )
}

/// Configuration for the GoCardless client.
///
/// # Example
///
/// ```
/// use gocardless_rs::{ClientConfig, Environment, RetryConfig};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Sandbox)
///     .with_timeout(Duration::from_secs(60))
///     .with_retry(RetryConfig::default().with_max_retries(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which GoCardless environment to talk to
    pub environment: Environment,
    /// Overrides the environment's base URL when set
    pub base_url: Option<Url>,
    /// Timeout for a single HTTP attempt
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Value of the `GoCardless-Version` header
    pub api_version: ApiVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
            api_version: ApiVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send requests to `base_url` instead of the environment's URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn endpoint(&self) -> String {
        match self.base_url {
            Some(ref url) => url.as_str().trim_end_matches('/').to_string(),
            None => self.environment.api_base_url().to_string(),
        }
    }
}

/// Configuration for automatic retries.
///
/// Every failed attempt is retried up to `max_retries` times. Retries are
/// immediate unless `initial_backoff` is raised above zero, in which case the
/// delay doubles per attempt up to `max_backoff`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries per call when no [`RequestOption::Retries`](crate::RequestOption::Retries) is given
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Maximum delay between retries
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate the backoff duration before retry number `attempt` (0-based).
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        let backoff_millis = (self.initial_backoff.as_millis() as u64).saturating_mul(factor);
        let max_millis = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff_millis.min(max_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.api_version.as_str(), "2015-07-06");
        assert_eq!(config.endpoint(), "https://api.gocardless.com");
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default()
            .with_environment(Environment::Sandbox)
            .with_base_url(Url::parse("http://127.0.0.1:8080/").unwrap());
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_user_agent_format() {
        let ua = default_user_agent();
        assert!(ua.starts_with("gocardless-rs/"));
        assert!(ua.contains(" rust/"));
    }

    #[test]
    fn test_retry_backoff_defaults_to_zero() {
        let config = RetryConfig::default();
        assert_eq!(config.backoff_for_attempt(0), Duration::ZERO);
        assert_eq!(config.backoff_for_attempt(5), Duration::ZERO);
    }

    #[test]
    fn test_retry_backoff() {
        let config = RetryConfig::default().with_initial_backoff(Duration::from_millis(500));
        assert_eq!(config.backoff_for_attempt(0), Duration::from_millis(500));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_millis(1000));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_retry_backoff_max() {
        let config = RetryConfig::default()
            .with_initial_backoff(Duration::from_secs(10))
            .with_max_backoff(Duration::from_secs(30));

        // 10 * 2^3 = 80, but capped at 30
        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(30));
        assert_eq!(config.backoff_for_attempt(80), Duration::from_secs(30));
    }
}
