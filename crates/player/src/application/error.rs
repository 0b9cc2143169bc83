//! Service layer error types
//!
//! Folds transport, server and local validation failures into one type the
//! controller can show to the player.

use thiserror::Error;

use delve_domain::DomainError;

use crate::ports::outbound::ApiError;
use crate::state::SubmitError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The party already holds the maximum number of members
    #[error("Party is already full (maximum {max} characters)")]
    PartyFull { max: usize },

    /// Server refused the request with an explanatory message
    #[error("{0}")]
    Rejected(String),

    /// The server could not be reached or answered with a bare status
    #[error("Server unavailable: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Local validation failed before anything was sent
    #[error("{0}")]
    Invalid(String),

    /// Another submission is still in flight
    #[error("A request is already in progress")]
    Busy,

    /// The operation needs a state the client is not in
    #[error("{0}")]
    Unavailable(String),
}

impl ServiceError {
    /// Text shown to the player; server rejections are reported verbatim.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Rejected { message, .. } => ServiceError::Rejected(message),
            ApiError::RequestFailed(msg) => ServiceError::Transport(msg),
            ApiError::HttpStatus(status) => ServiceError::Transport(format!("HTTP status {status}")),
            ApiError::ParseError(msg) => ServiceError::ParseError(msg),
            ApiError::SerializeError(msg) => ServiceError::Invalid(msg),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) | DomainError::Parse(msg) => ServiceError::Invalid(msg),
        }
    }
}

impl From<SubmitError> for ServiceError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::PartyFull { max } => ServiceError::PartyFull { max },
            SubmitError::Busy => ServiceError::Busy,
            SubmitError::Closed => {
                ServiceError::Unavailable("Character creation is closed".to_string())
            }
            SubmitError::Invalid(domain) => domain.into(),
        }
    }
}
