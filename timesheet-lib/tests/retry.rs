//! Integration tests for retrying backend calls.
//!
//! Time is paused, so backoff delays are observed exactly without sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use timesheet_lib::error::{BackendError, RetryError, UNIQUE_VIOLATION};
use timesheet_lib::retry::{
    CancellationToken, RetryPolicy, run_with_retry, run_with_retry_cancellable, run_with_retry_when,
};
use tokio::time::Instant;

/// A fake backend that fails a fixed number of times before answering.
#[derive(Clone)]
struct FlakyBackend {
    calls: Arc<AtomicU32>,
    failures: u32,
    error: BackendError,
}

impl FlakyBackend {
    fn new(failures: u32, error: BackendError) -> Self {
        Self {
            calls: Arc::new(AtomicU32::new(0)),
            failures,
            error,
        }
    }

    async fn create_project(&self, name: &str) -> Result<String, BackendError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            let mut error = self.error.clone();
            error.message = format!("{} (call {call})", error.message);
            return Err(error);
        }
        Ok(format!("{name}#{call}"))
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_returns_last_backend_error() {
    let backend = FlakyBackend::new(u32::MAX, BackendError::http(503, "unavailable"));
    let policy = RetryPolicy::new(4, Duration::from_millis(100), true);

    let err = run_with_retry(|| backend.create_project("Website"), &policy)
        .await
        .unwrap_err();

    assert_eq!(backend.calls(), 4);
    assert!(err.is_exhausted());
    assert_eq!(err.last_error().map(|e| e.message.as_str()), Some("unavailable (call 4)"));
    assert_eq!(err.into_inner().and_then(|e| e.status), Some(503));
}

#[tokio::test(start_paused = true)]
async fn test_recovers_after_transient_failures() {
    let backend = FlakyBackend::new(2, BackendError::transport("connection reset"));
    let policy = RetryPolicy::new(5, Duration::from_millis(100), true);
    let start = Instant::now();

    let created = run_with_retry(|| backend.create_project("Website"), &policy)
        .await
        .unwrap();

    assert_eq!(created, "Website#3");
    assert_eq!(backend.calls(), 3);
    assert_eq!(start.elapsed(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_is_not_retried() {
    let backend = FlakyBackend::new(
        u32::MAX,
        BackendError::http(409, "already exists").with_code(UNIQUE_VIOLATION),
    );
    let policy = RetryPolicy::new(5, Duration::from_millis(100), true);

    let err = run_with_retry_when(
        || backend.create_project("Website"),
        &policy,
        &CancellationToken::new(),
        BackendError::is_retryable,
    )
    .await
    .unwrap_err();

    assert_eq!(backend.calls(), 1);
    match err {
        RetryError::Permanent { attempts, source } => {
            assert_eq!(attempts, 1);
            assert!(source.is_duplicate());
        }
        other => panic!("expected permanent failure, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancel_from_another_task() {
    let backend = FlakyBackend::new(u32::MAX, BackendError::http(500, "boom"));
    let policy = RetryPolicy::new(10, Duration::from_secs(1), false);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        trigger.cancel();
    });

    let err = run_with_retry_cancellable(|| backend.create_project("Website"), &policy, &cancel)
        .await
        .unwrap_err();

    // Attempts at 0s, 1s and 2s; cancelled during the wait before the 4th.
    assert!(err.is_cancelled());
    assert_eq!(err.attempts(), 3);
    assert_eq!(backend.calls(), 3);
}
