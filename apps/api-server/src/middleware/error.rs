//! Error handling - maps application errors to envelope responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::{ErrorResponse, ServerErrorResponse};
use std::fmt;

use quill_core::error::RepoError;

/// Application-level error type. Each handler carries its own error
/// boundary: failures become a response here and never propagate further.
#[derive(Debug)]
pub enum AppError {
    /// Requested id has no matching document.
    NotFound(String),
    /// A write the store did not acknowledge.
    WriteFailed(String),
    /// Store failure. The detail is logged server-side; the client only
    /// sees the fixed server-error envelope.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Domain errors answer 400, matching the original API contract.
            AppError::NotFound(_) | AppError::WriteFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) | AppError::WriteFailed(msg) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::bad_request(msg.as_str()))
            }
            AppError::Internal(detail) => {
                tracing::error!("Store error: {}", detail);
                HttpResponse::build(self.status_code()).json(ServerErrorResponse::default())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Unacknowledged => {
                AppError::WriteFailed("could not create blog".to_string())
            }
            RepoError::Connection(msg) | RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
