//! # Common Error Types
//!
//! Consolidated error handling for the client application.
//!
//! ## Error Categories
//!
//! - **Api**: catalog server communication errors (network, HTTP, GraphQL,
//!   JSON parsing)
//! - **Config**: connection configuration problems (missing, unreadable,
//!   unwritable)
//! - **Validation**: input validation errors (rating out of range, blank
//!   server URL)
//!
//! ## Error Conversion
//!
//! The gateway layer reports failures as kind-tagged `String`s (see
//! [`crate::services::api`]); those convert into `AppError::Api` via `From`.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` provides the
/// `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog server communication error: network failures, non-success
    /// HTTP statuses, GraphQL errors, malformed responses.
    #[error("API error: {0}")]
    Api(String),

    /// Connection configuration error: file unreadable or unwritable,
    /// required values missing.
    #[error("Config error: {0}")]
    Config(String),

    /// Input validation error: out-of-range rating, blank server URL,
    /// empty tag name.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_category() {
        assert_eq!(
            AppError::Api("timeout".to_string()).to_string(),
            "API error: timeout"
        );
        assert_eq!(
            AppError::Validation("rating must be 0-100".to_string()).to_string(),
            "Validation error: rating must be 0-100"
        );
    }

    #[test]
    fn test_from_string_is_api() {
        let err: AppError = "connection refused".into();
        assert!(matches!(err, AppError::Api(_)));
    }
}
