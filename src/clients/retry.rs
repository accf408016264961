//! Fixed-delay retry driver.
//!
//! Every failure is retried until the attempt budget runs out. There is no
//! backoff, no jitter, and no split between retryable and fatal errors.

use std::future::Future;
use std::time::Duration;

use crate::clients::errors::PipefyError;
use crate::config::{PipefyConfig, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY};

/// How many times a call is attempted and how long to wait in between.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pipefy_api::clients::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(2));
/// assert_eq!(policy.attempts(), 3);
///
/// // A budget of zero still sends one request.
/// assert_eq!(RetryPolicy::new(0, Duration::ZERO).attempts(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. `attempts` is raised to 1 if it is 0.
    #[must_use]
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Creates the policy described by a configuration.
    #[must_use]
    pub fn from_config(config: &PipefyConfig) -> Self {
        Self::new(config.retry_attempts(), config.retry_delay())
    }

    /// Returns the maximum number of attempts.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `operation` until it succeeds or the budget is spent.
    ///
    /// The closure receives the 1-based attempt number. Each failure is
    /// logged and followed by the fixed delay, except the last, which is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt.
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T, PipefyError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, PipefyError>>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) if attempt >= self.attempts => {
                    tracing::warn!(
                        attempt,
                        attempts = self.attempts,
                        error = %error,
                        "Pipefy request failed, no attempts left"
                    );
                    return Err(error);
                }
                Err(error) => {
                    tracing::warn!(
                        attempt,
                        attempts = self.attempts,
                        error = %error,
                        "Pipefy request failed, waiting {:?} before retrying",
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn api_error(message: &str) -> PipefyError {
        PipefyError::Api {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fails_twice_then_succeeds_within_budget() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);

        let result = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(api_error("not yet"))
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_always_failing_returns_last_error_after_budget() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);

        let result: Result<(), _> = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(api_error(&format!("failure {attempt}"))) }
            })
            .await;

        assert!(matches!(
            result,
            Err(PipefyError::Api { ref message }) if message == "failure 3"
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_does_not_retry() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(5, Duration::ZERO);

        let result = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, PipefyError>(1) }
            })
            .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_fixed_delay_between_attempts_only() {
        let policy = RetryPolicy::new(3, Duration::from_secs(10));
        let started = tokio::time::Instant::now();

        let result: Result<(), _> = policy.run(|_| async { Err(api_error("down")) }).await;

        assert!(result.is_err());
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(20));
        assert!(elapsed < Duration::from_secs(30));
    }

    #[test]
    fn test_zero_attempts_is_raised_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).attempts(), 1);
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }
}
