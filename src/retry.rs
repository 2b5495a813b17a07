//! Retry logic with exponential backoff
//!
//! Transient HTTP failures are retried with exponential backoff. The
//! transient set is the classic gateway/server-overload group
//! {500, 502, 503, 504}; everything else fails immediately.
//!
//! # Example
//!
//! ```no_run
//! use timezone_dl::retry::fetch_with_retry;
//! use timezone_dl::config::RetryConfig;
//! use timezone_dl::error::Error;
//!
//! # async fn example() -> Result<(), Error> {
//! let config = RetryConfig::default();
//! let body = fetch_with_retry(&config, || async {
//!     Ok::<_, Error>("dataset".to_string())
//! }).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::RetryConfig;
use crate::error::Error;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// HTTP status codes eligible for retry
pub const TRANSIENT_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (listed server statuses, network timeouts, connect
/// failures) should return `true`. Permanent failures (client-error
/// statuses, malformed payloads, filesystem problems) should return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            // Only the documented transient statuses are retried; a 404 or
            // any other terminal status fails the run immediately.
            Error::Download { status } => TRANSIENT_STATUS_CODES.contains(status),
            // Transport-level timeouts and connect failures are transient
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            // A malformed body will be malformed on the next attempt too
            Error::Parse(_) => false,
            // Output-side and configuration errors never reach the fetch
            // path, but classify them anyway: all permanent.
            Error::Csv(_) | Error::Io(_) | Error::Config { .. } => false,
        }
    }
}

/// Execute an async operation with exponential backoff retry logic.
///
/// The operation runs once, then up to `config.max_retries` more times as
/// long as each failure is retryable. Delays start at
/// `config.initial_delay` and grow by `config.backoff_multiplier`, capped
/// at `config.max_delay`, with optional jitter.
///
/// Returns the successful result or the last error once the budget is
/// exhausted or a non-retryable error occurs.
pub async fn fetch_with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IsRetryable + std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "request succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() && attempt < config.max_retries => {
                attempt += 1;

                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis(),
                    "request failed, retrying"
                );

                let jittered_delay = if config.jitter {
                    add_jitter(delay)
                } else {
                    delay
                };

                tokio::time::sleep(jittered_delay).await;

                let next_delay =
                    Duration::from_secs_f64(delay.as_secs_f64() * config.backoff_multiplier);
                delay = next_delay.min(config.max_delay);
            }
            Err(e) => {
                if e.is_retryable() {
                    tracing::error!(
                        error = %e,
                        attempts = attempt + 1,
                        "request failed after all retry attempts exhausted"
                    );
                } else {
                    tracing::error!(error = %e, "request failed with non-retryable error");
                }
                return Err(e);
            }
        }
    }
}

/// Add random jitter to a delay.
///
/// Jitter is uniformly distributed between 0% and 100% of the delay, so
/// the actual delay falls between `delay` and `2 * delay`.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    let jittered_secs = delay.as_secs_f64() * (1.0 + jitter_factor);
    Duration::from_secs_f64(jittered_secs)
}
