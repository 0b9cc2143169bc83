//! Errors crossing the HTTP boundary.

use thiserror::Error;

/// Failure of a single request to the game server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-success status carrying a structured `{"error": ...}` body
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Non-success status without a structured body
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}
