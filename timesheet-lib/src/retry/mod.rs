//! Retry with constant or exponential backoff.
//!
//! [`run_with_retry`] wraps any fallible async operation. Waiting between
//! attempts uses the tokio timer, so only the calling task is suspended.
//! [`run_with_retry_cancellable`] adds a [`CancellationToken`] that aborts
//! both pending waits and further attempts.

mod executor;
mod policy;

pub use executor::run_with_retry;
pub use executor::run_with_retry_cancellable;
pub use executor::run_with_retry_when;
pub use policy::RetryPolicy;
pub use tokio_util::sync::CancellationToken;
