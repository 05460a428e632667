//! `BearerToken` extractor — pulls the raw bearer credential from the
//! `Authorization` header.
//!
//! The header must be exactly `Bearer <token>` with a single space; any
//! other shape is a request-format error raised here, before handler code
//! runs, so no decode is ever attempted on a malformed request.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use gatehouse_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The raw token string taken from a well-formed `Authorization` header.
///
/// Carries no claims; verification is the token subsystem's job. This
/// extractor only settles the transport-format question.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// Returns the raw token string.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::validation("Missing Authorization header"))?;

        let header = header
            .to_str()
            .map_err(|_| AppError::validation("Authorization header is not valid UTF-8"))?;

        match header.split_once(' ') {
            Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => {
                Ok(Self(token.to_string()))
            }
            _ => Err(AppError::validation(
                "Authorization header must be of the form 'Bearer <token>'",
            )
            .into()),
        }
    }
}
