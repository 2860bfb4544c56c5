//! # Service Errors
//!
//! One closed error enumeration shared by repository, use-case, and
//! handler. The repository and use-case return these values up the stack
//! without local recovery; the handler (via `IntoResponse`) is the sole
//! translation point to a user-visible status and `{"message": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the user pipeline
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Requested record does not exist (or the whole table is empty)
    #[error("your requested item is not found")]
    NotFound,

    /// Record already exists
    #[error("your item already exists")]
    Conflict,

    /// Malformed path identifier
    #[error("given param is not valid")]
    BadParam,

    /// Required field missing or empty
    #[error("required field is missing: {0}")]
    MissingField(&'static str),

    /// Email fails the pattern check
    #[error("email address is not valid")]
    InvalidEmail,

    /// Request body could not be decoded at all
    #[error("unprocessable request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected persistence failure, including row-count anomalies
    #[error("internal server error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::Conflict => StatusCode::CONFLICT,
            UserError::BadParam => StatusCode::BAD_REQUEST,
            UserError::MissingField(_) => StatusCode::BAD_REQUEST,
            UserError::InvalidEmail => StatusCode::BAD_REQUEST,
            UserError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<UserError> for ErrorResponse {
    fn from(err: UserError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
