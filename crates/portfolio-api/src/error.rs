//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use portfolio_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiResponse;

/// An [`AppError`] on its way out of a handler or middleware.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthenticated | ErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::TranslationUnavailable => StatusCode::NOT_IMPLEMENTED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        } else {
            tracing::debug!(kind = %err.kind, code = err.code(), "Request rejected");
        }

        let body = ApiResponse {
            success: false,
            error: Some(err.code().to_string()),
            message: err.message,
            data: err.details.unwrap_or(Value::Null),
            meta: Default::default(),
        };

        (status, body).into_response()
    }
}
