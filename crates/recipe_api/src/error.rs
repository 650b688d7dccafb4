//! HTTP error mapping.
//!
//! # Responsibility
//! - Translate repository errors into HTTP status codes.
//!
//! # Invariants
//! - Not-found surfaces as a bare 404 with the framework-default body.
//! - Anything else is a 500; details go to the log, not the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recipe_core::RepoError;

/// Terminal request failure. Validation failures on create never reach this
/// type; they are part of the success-shaped response contract.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(message) => {
                log::error!("event=request_failed module=http status=error error={message}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
