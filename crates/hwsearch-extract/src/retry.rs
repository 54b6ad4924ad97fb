//! Retry utilities for transient page-fetch failures.
//!
//! Non-retriable errors (404, most non-2xx statuses) are propagated
//! immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::ExtractError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`ExtractError::Http`] — network-level failure (connection reset, timeout, etc.).
/// - [`ExtractError::UnexpectedStatus`] with a 5xx status — server-side trouble
///   that may clear up.
///
/// Non-retriable errors (propagated immediately):
/// - [`ExtractError::NotFound`] — 404; retrying would return the same result.
/// - [`ExtractError::UnexpectedStatus`] with a 4xx status — a client problem
///   retrying won't fix.
fn is_retriable(err: &ExtractError) -> bool {
    match err {
        ExtractError::Http(_) => true,
        ExtractError::UnexpectedStatus { status, .. } => *status >= 500,
        ExtractError::NotFound { .. } => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after the
/// first try. If all retries are exhausted the last error is returned.
/// Non-retriable errors are returned immediately without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ExtractError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ExtractError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if is_retriable(&err) && attempt < max_retries => {
                let delay_secs = backoff_base_secs.saturating_mul(2u64.saturating_pow(attempt));
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    delay_secs,
                    error = %err,
                    "transient fetch error, retrying after backoff"
                );
                if delay_secs > 0 {
                    tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                }
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
