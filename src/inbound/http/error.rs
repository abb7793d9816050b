//! HTTP adapter mapping for port errors.
//!
//! Purpose: keep the persistence error type HTTP-agnostic while letting Actix
//! handlers propagate failures with `?` and emit consistent status codes.
//! Responses stay plain text; the service defines no richer error contract.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::UserPersistenceError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler-level error turning port failures into HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The repository rejected or failed the requested write.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Persistence(UserPersistenceError::Connection { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Persistence(UserPersistenceError::Query { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Log the detail, answer with a generic body; adapter internals stay
        // out of client responses.
        error!(error = %self, "request failed");
        let body = match self.status_code() {
            StatusCode::SERVICE_UNAVAILABLE => "service unavailable",
            _ => "internal server error",
        };
        HttpResponse::build(self.status_code()).body(body)
    }
}
