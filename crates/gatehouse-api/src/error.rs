//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use gatehouse_auth::AuthError;
use gatehouse_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP-boundary wrapper around [`AppError`].
///
/// Exists so the `IntoResponse` impl can live in this crate; everything
/// that can fail in a handler converts into it with `?`.
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// The underlying application error.
    pub fn inner(&self) -> &AppError {
        &self.inner
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self {
            inner: err,
            details: None,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        AppError::from(err).into()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).ok();
        Self {
            inner: AppError::validation("Request validation failed"),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self.inner.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL"),
            ErrorKind::SessionExpired => (StatusCode::UNAUTHORIZED, "SESSION_EXPIRED"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Configuration => {
                tracing::error!(error = %self.inner, "Configuration error surfaced to a request");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION")
            }
            ErrorKind::Serialization | ErrorKind::Internal => {
                tracing::error!(error = %self.inner, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.inner.message.clone(),
            details: self.details,
        };

        (status, Json(body)).into_response()
    }
}
