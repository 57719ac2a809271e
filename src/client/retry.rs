//! Retry executor shared by every API call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use super::config::RetryConfig;
use crate::{Error, Result};

/// How a single call is retried.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts allowed after the first one fails
    pub retries: u32,
    /// Delay schedule between attempts
    pub backoff: RetryConfig,
    /// Instant after which no attempt is started or awaited
    pub deadline: Option<Instant>,
}

impl RetryPolicy {
    /// Immediate retries, no deadline.
    pub fn new(retries: u32) -> Self {
        Self {
            retries,
            backoff: RetryConfig::default(),
            deadline: None,
        }
    }

    /// Use `backoff` to space out attempts.
    pub fn with_backoff(mut self, backoff: RetryConfig) -> Self {
        self.backoff = backoff;
        self
    }

    /// Stop the call once `timeout` has passed from now.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.deadline = timeout.map(|t| Instant::now() + t);
        self
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Run `attempt` until it succeeds or the policy is exhausted.
///
/// `attempt` receives the 0-based attempt number. It is called once, then
/// again after each retryable failure, up to `policy.retries` more times.
/// The first success is returned; otherwise the last error, unchanged.
/// Once the deadline passes the call ends with [`Error::Timeout`], including
/// when it passes mid-attempt.
///
/// # Example
///
/// ```
/// use gocardless_rs::client::retry::{execute, RetryPolicy};
/// use gocardless_rs::Error;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = execute(&RetryPolicy::new(2), |n| async move {
///     if n < 2 { Err(Error::MissingResult) } else { Ok(n) }
/// })
/// .await;
/// assert_eq!(result.unwrap(), 2);
/// # }
/// ```
pub async fn execute<T, F, Fut>(policy: &RetryPolicy, mut attempt: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut n = 0;

    loop {
        if policy.expired() {
            return Err(Error::Timeout);
        }

        let result = match policy.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, attempt(n))
                .await
                .unwrap_or(Err(Error::Timeout)),
            None => attempt(n).await,
        };

        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if n >= policy.retries || !err.is_retryable() {
            return Err(err);
        }

        tracing::warn!(
            attempt = n + 1,
            remaining = policy.retries - n,
            error = %err,
            "request attempt failed; retrying"
        );

        let delay = policy.backoff.backoff_for_attempt(n);
        if !delay.is_zero() {
            match policy.deadline {
                Some(deadline) if Instant::now() + delay >= deadline => {
                    return Err(Error::Timeout);
                }
                _ => tokio::time::sleep(delay).await,
            }
        }

        n += 1;
    }
}
