//! Unified error handling
//!
//! Every failure renders as the same `{ "message": ... }` JSON body the
//! remote API uses, so the shell has one error shape to display. Upstream
//! client errors map back onto their original status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mantis_client::ClientError;
use shared::client::ErrorMessage;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No session for the request (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Upstream rejected the call (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Presence checks or upstream validation failed (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Any other upstream failure, surfaced at its original status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The remote API was unreachable (502)
    #[error("Remote API unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for panel handlers
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Please login first".to_string())
            }
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::Unavailable(msg) => {
                error!(target: "upstream", error = %msg, "Remote API unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    "Remote API unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorMessage { message })).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Unauthorized => AppError::Unauthorized,
            ClientError::Forbidden(msg) => AppError::Forbidden(msg),
            ClientError::NotFound(msg) => AppError::NotFound(msg),
            ClientError::Validation(msg) => AppError::Validation(msg),
            ClientError::Api { status, message } => AppError::Upstream { status, message },
            ClientError::Http(e) => AppError::Unavailable(e.to_string()),
            ClientError::InvalidResponse(msg) => AppError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_status() {
        assert!(matches!(
            AppError::from(ClientError::Unauthorized),
            AppError::Unauthorized
        ));
        assert!(matches!(
            AppError::from(ClientError::Validation("bad".into())),
            AppError::Validation(_)
        ));
        match AppError::from(ClientError::Api {
            status: 409,
            message: "duplicate".into(),
        }) {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "duplicate");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn invalid_response_is_internal() {
        assert!(matches!(
            AppError::from(ClientError::InvalidResponse("truncated".into())),
            AppError::Internal(_)
        ));
    }
}
