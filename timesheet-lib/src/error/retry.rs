//! Retry error types

/// Errors returned by the retry executor.
///
/// The wrapped operation's own error is never converted or swallowed: every
/// variant that saw a failure carries the last one unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    /// Every permitted attempt failed.
    #[error("Retries exhausted after {attempts} attempt(s): {source}")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// Error from the final attempt.
        #[source]
        source: E,
    },

    /// The operation failed with an error the caller marked as not retryable.
    #[error("Permanent failure on attempt {attempts}: {source}")]
    Permanent {
        /// Number of attempts made, including the failing one.
        attempts: u32,
        /// The non-retryable error.
        #[source]
        source: E,
    },

    /// The retry sequence was cancelled before it could finish.
    #[error("Retry cancelled after {attempts} attempt(s)")]
    Cancelled {
        /// Number of attempts made before cancellation.
        attempts: u32,
        /// Error from the most recent attempt, if any attempt ran.
        last: Option<E>,
    },
}

impl<E> RetryError<E> {
    /// Returns the number of attempts that were made.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. }
            | Self::Permanent { attempts, .. }
            | Self::Cancelled { attempts, .. } => *attempts,
        }
    }

    /// Returns the last underlying error, if any attempt ran.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            Self::Exhausted { source, .. } | Self::Permanent { source, .. } => Some(source),
            Self::Cancelled { last, .. } => last.as_ref(),
        }
    }

    /// Consumes the error and returns the last underlying error, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Exhausted { source, .. } | Self::Permanent { source, .. } => Some(source),
            Self::Cancelled { last, .. } => last,
        }
    }

    /// Returns `true` if the sequence was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns `true` if every permitted attempt failed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
