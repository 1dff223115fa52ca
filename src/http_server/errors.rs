//! HTTP error mapping
//!
//! Service failures become JSON error responses. Request-level rejections
//! map to 400, store faults to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create requests must leave id assignment to the store.
    #[error("request body must not contain an id")]
    IdInBody,

    /// Failure bubbled up from the service.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::IdInBody => StatusCode::BAD_REQUEST,
            ApiError::Service(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
