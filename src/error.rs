//! Error Types
//!
//! Failures of the dashboard's asynchronous operations.

use thiserror::Error;

/// Failure talking to the records endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Failure writing to the system clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 502, status_text: "Bad Gateway".into() };
        assert_eq!(err.to_string(), "server responded 502 Bad Gateway");
    }
}
