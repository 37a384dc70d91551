//! Retry loop for fallible async operations.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::RetryPolicy;
use crate::error::RetryError;

/// Runs `operation` until it succeeds or the policy's attempts are used up.
///
/// The first success is returned immediately. After `max_attempts` failures
/// the last error is returned inside [`RetryError::Exhausted`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use timesheet_lib::retry::{RetryPolicy, run_with_retry};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # rt.block_on(async {
/// let policy = RetryPolicy::default().delay(Duration::from_millis(1));
/// let mut calls = 0;
/// let result = run_with_retry(
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move {
///             if attempt < 2 { Err("flaky") } else { Ok(attempt) }
///         }
///     },
///     &policy,
/// )
/// .await;
/// assert_eq!(result.unwrap(), 2);
/// # });
/// ```
pub async fn run_with_retry<T, E, F, Fut>(operation: F, policy: &RetryPolicy) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    run_with_retry_when(operation, policy, &CancellationToken::new(), |_| true).await
}

/// Like [`run_with_retry`], but stops when `cancel` fires.
///
/// The token is checked before every attempt and raced against every wait,
/// so a cancelled caller never starts another attempt.
pub async fn run_with_retry_cancellable<T, E, F, Fut>(
    operation: F,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    run_with_retry_when(operation, policy, cancel, |_| true).await
}

/// Like [`run_with_retry_cancellable`], but only retries errors for which
/// `should_retry` returns `true`.
///
/// Any other error ends the sequence with [`RetryError::Permanent`].
pub async fn run_with_retry_when<T, E, F, Fut, P>(
    mut operation: F,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut should_retry: P,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&E) -> bool,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;
    let mut last = None;

    loop {
        if cancel.is_cancelled() {
            return Err(RetryError::Cancelled { attempts, last });
        }

        attempts += 1;
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        if !should_retry(&error) {
            return Err(RetryError::Permanent {
                attempts,
                source: error,
            });
        }

        if attempts >= max_attempts {
            return Err(RetryError::Exhausted {
                attempts,
                source: error,
            });
        }

        last = Some(error);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(RetryError::Cancelled { attempts, last });
            }
            _ = tokio::time::sleep(policy.delay_for(attempts)) => {}
        }
    }
}
