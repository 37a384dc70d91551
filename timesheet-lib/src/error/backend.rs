//! Backend error types

/// SQLSTATE for a unique constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for a foreign key violation.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// An error reported by the backend service.
///
/// Classification (duplicate, retryable, not found) is done on the
/// structured `status` and `code` fields. The `message` is for humans only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", display_backend(.status, .code, .message))]
pub struct BackendError {
    /// HTTP status code, or `None` when the request never got a response.
    pub status: Option<u16>,
    /// Structured error code (SQLSTATE or service code), if available.
    pub code: Option<String>,
    /// Human-readable error message.
    pub message: String,
}

fn display_backend(status: &Option<u16>, code: &Option<String>, message: &str) -> String {
    match (status, code) {
        (Some(status), Some(code)) => format!("HTTP {status} [{code}]: {message}"),
        (Some(status), None) => format!("HTTP {status}: {message}"),
        (None, Some(code)) => format!("[{code}]: {message}"),
        (None, None) => format!("Transport error: {message}"),
    }
}

impl BackendError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            code: None,
            message: message.into(),
        }
    }

    /// Creates an error for a request that never received a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    /// Attaches a structured error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the structured error code, if available.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns `true` if the backend rejected the write as a duplicate.
    pub fn is_duplicate(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION) || (self.status == Some(409) && self.code.is_none())
    }

    /// Returns `true` if the write referenced a row that does not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        self.code() == Some(FOREIGN_KEY_VIOLATION)
    }

    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self.status {
            Some(status) => matches!(status, 408 | 429 | 500 | 502 | 503 | 504),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_uses_code_not_message() {
        let dup = BackendError::http(409, "whatever").with_code(UNIQUE_VIOLATION);
        assert!(dup.is_duplicate());

        let misleading = BackendError::http(400, "duplicate key value violates constraint")
            .with_code("22P02");
        assert!(!misleading.is_duplicate());
    }

    #[test]
    fn test_conflict_without_code_is_duplicate() {
        assert!(BackendError::http(409, "conflict").is_duplicate());
        assert!(!BackendError::http(409, "conflict").with_code("P0001").is_duplicate());
    }

    #[test]
    fn test_retryable() {
        assert!(BackendError::http(429, "slow down").is_retryable());
        assert!(BackendError::http(503, "unavailable").is_retryable());
        assert!(BackendError::transport("connection reset").is_retryable());
        assert!(!BackendError::http(400, "bad request").is_retryable());
        assert!(!BackendError::http(409, "conflict").is_retryable());
    }

    #[test]
    fn test_display() {
        let err = BackendError::http(409, "exists").with_code(UNIQUE_VIOLATION);
        assert_eq!(err.to_string(), "HTTP 409 [23505]: exists");
        assert_eq!(
            BackendError::transport("timed out").to_string(),
            "Transport error: timed out"
        );
    }
}
