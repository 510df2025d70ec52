//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-2xx status with the parsed upstream message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// The upstream message, as the panel surfaces it to the shell
    pub fn message(&self) -> String {
        match self {
            Self::Forbidden(m) | Self::NotFound(m) | Self::Validation(m) => m.clone(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
