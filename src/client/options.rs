//! Per-call request options.
//!
//! Every service method takes a slice of [`RequestOption`]s. They are applied
//! in order to a fresh [`RequestOptions`] before the request is built; the
//! first option that fails aborts the call before anything is sent.
//!
//! ```
//! use gocardless_rs::{RequestOption, RequestOptions};
//!
//! let opts = RequestOptions::resolve(3, &[
//!     RequestOption::retries(1),
//!     RequestOption::header("Accept-Language", "fr"),
//!     RequestOption::retries(5),
//! ])?;
//! assert_eq!(opts.retries, 5);
//! # Ok::<(), gocardless_rs::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use crate::{Error, Result};

type ApplyFn = dyn Fn(&mut RequestOptions) -> Result<()> + Send + Sync;

/// A single adjustment to the options of one call.
#[derive(Clone)]
pub enum RequestOption {
    /// Retry a failed attempt this many times
    Retries(u32),
    /// Use this key instead of generating one for mutating calls
    IdempotencyKey(String),
    /// Insert or override a request header
    Header(String, String),
    /// Give up on the whole call, retries included, after this long
    Timeout(Duration),
    /// Arbitrary adjustment; an error aborts the call
    With(Arc<ApplyFn>),
}

impl RequestOption {
    /// Retry a failed attempt `retries` times.
    pub fn retries(retries: u32) -> Self {
        RequestOption::Retries(retries)
    }

    /// Send `key` as the `Idempotency-Key`.
    pub fn idempotency_key(key: impl Into<String>) -> Self {
        RequestOption::IdempotencyKey(key.into())
    }

    /// Set header `name` to `value`, replacing any earlier value.
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        RequestOption::Header(name.into(), value.into())
    }

    /// Bound the whole call by `timeout`.
    pub fn timeout(timeout: Duration) -> Self {
        RequestOption::Timeout(timeout)
    }

    /// Apply an arbitrary function to the options.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&mut RequestOptions) -> Result<()> + Send + Sync + 'static,
    {
        RequestOption::With(Arc::new(f))
    }

    /// Apply this option to `opts`.
    pub fn apply(&self, opts: &mut RequestOptions) -> Result<()> {
        match self {
            RequestOption::Retries(n) => opts.retries = *n,
            RequestOption::IdempotencyKey(key) => {
                if key.trim().is_empty() {
                    return Err(Error::InvalidInput(
                        "Idempotency key must not be empty".to_string(),
                    ));
                }
                opts.idempotency_key = Some(key.clone());
            }
            RequestOption::Header(name, value) => {
                let name = HeaderName::try_from(name.as_str()).map_err(|e| {
                    Error::InvalidInput(format!("Invalid header name {:?}: {}", name, e))
                })?;
                let value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                    Error::InvalidInput(format!("Invalid value for header {}: {}", name, e))
                })?;
                opts.headers.insert(name, value);
            }
            RequestOption::Timeout(timeout) => opts.timeout = Some(*timeout),
            RequestOption::With(f) => f(opts)?,
        }
        Ok(())
    }
}

impl fmt::Debug for RequestOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOption::Retries(n) => f.debug_tuple("Retries").field(n).finish(),
            RequestOption::IdempotencyKey(key) => {
                f.debug_tuple("IdempotencyKey").field(key).finish()
            }
            RequestOption::Header(name, value) => {
                f.debug_tuple("Header").field(name).field(value).finish()
            }
            RequestOption::Timeout(timeout) => f.debug_tuple("Timeout").field(timeout).finish(),
            RequestOption::With(_) => f.write_str("With(..)"),
        }
    }
}

/// The resolved options for one call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Retries after the first failed attempt
    pub retries: u32,
    /// Key sent as `Idempotency-Key` on mutating calls
    pub idempotency_key: Option<String>,
    /// Extra headers, applied after the fixed ones
    pub headers: HeaderMap,
    /// Deadline for the whole call
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Options with `retries` and nothing else set.
    pub fn new(retries: u32) -> Self {
        Self {
            retries,
            idempotency_key: None,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Apply `opts` in order to fresh options carrying `default_retries`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails; later options are
    /// not applied.
    pub fn resolve(default_retries: u32, opts: &[RequestOption]) -> Result<Self> {
        let mut resolved = Self::new(default_retries);
        for opt in opts {
            opt.apply(&mut resolved)?;
        }
        Ok(resolved)
    }

    /// The idempotency key, generating one first if none was supplied.
    pub(crate) fn ensure_idempotency_key(&mut self) -> &str {
        self.idempotency_key.get_or_insert_with(new_idempotency_key)
    }
}

/// Generate a fresh idempotency key.
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retries() {
        let opts = RequestOptions::resolve(3, &[]).unwrap();
        assert_eq!(opts.retries, 3);
        assert!(opts.idempotency_key.is_none());
        assert!(opts.headers.is_empty());
    }

    #[test]
    fn test_last_retries_wins() {
        let opts = RequestOptions::resolve(
            3,
            &[
                RequestOption::retries(7),
                RequestOption::header("X-Trace", "a"),
                RequestOption::retries(0),
            ],
        )
        .unwrap();
        assert_eq!(opts.retries, 0);
    }

    #[test]
    fn test_header_override() {
        let opts = RequestOptions::resolve(
            3,
            &[
                RequestOption::header("Accept-Language", "en"),
                RequestOption::header("accept-language", "fr"),
            ],
        )
        .unwrap();
        assert_eq!(opts.headers.len(), 1);
        assert_eq!(opts.headers["accept-language"], "fr");
    }

    #[test]
    fn test_invalid_header_fails() {
        let err = RequestOptions::resolve(3, &[RequestOption::header("bad header", "x")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = RequestOptions::resolve(3, &[RequestOption::header("X-Ok", "line\nbreak")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_idempotency_key_fails() {
        let err = RequestOptions::resolve(3, &[RequestOption::idempotency_key("  ")]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_fail_fast() {
        let applied = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let seen = applied.clone();

        let result = RequestOptions::resolve(
            3,
            &[
                RequestOption::with(|_| Err(Error::InvalidInput("rejected".into()))),
                RequestOption::with(move |_| {
                    seen.store(true, std::sync::atomic::Ordering::SeqCst);
                    Ok(())
                }),
            ],
        );

        assert!(matches!(result, Err(Error::InvalidInput(ref m)) if m == "rejected"));
        assert!(!applied.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_ensure_idempotency_key() {
        let mut generated = RequestOptions::new(3);
        let key = generated.ensure_idempotency_key().to_string();
        assert_eq!(key.len(), 36);
        // stable once generated
        assert_eq!(generated.ensure_idempotency_key(), key);

        let mut supplied =
            RequestOptions::resolve(3, &[RequestOption::idempotency_key("my-key")]).unwrap();
        assert_eq!(supplied.ensure_idempotency_key(), "my-key");
    }

    #[test]
    fn test_generated_keys_are_unique() {
        assert_ne!(new_idempotency_key(), new_idempotency_key());
    }
}
