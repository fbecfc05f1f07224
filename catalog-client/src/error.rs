//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload rejected, either by the client-side validator or by the server (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse error classification seen by command handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Precondition failed; never retried without user input
    ValidationRejected,
    /// Network or server failure on any call
    TransportError,
    /// Single-entity fetch resolved to no result
    NotFound,
}

impl ClientError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationRejected,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Http(_) | Self::InvalidResponse(_) | Self::Internal(_) | Self::Serialization(_) => {
                ErrorKind::TransportError
            }
        }
    }

    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
