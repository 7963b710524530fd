//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network-level)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by backend validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Backend-provided message suitable for user-visible surfacing
    ///
    /// Network-level and decode failures carry no backend text; callers
    /// fall back to a generic message for those.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::NotFound(msg)
            | ClientError::Validation(msg)
            | ClientError::Internal(msg) => {
                if msg.is_empty() {
                    None
                } else {
                    Some(msg)
                }
            }
            ClientError::Http(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Serialization(_) => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
