//! Error taxonomy for token verification and rotation.

use thiserror::Error;

use gatehouse_core::error::AppError;

/// Errors produced by the token subsystem.
///
/// `MalformedToken`, `BadSignature`, and `Expired` come out of the codec;
/// the refresher collapses them into `InvalidCredential` or `SessionExpired`
/// depending on which token failed and how. All outcomes are terminal;
/// verification is deterministic and nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token's structural format is unrecognized.
    #[error("malformed token")]
    MalformedToken,
    /// The integrity tag does not match the payload under the current secret.
    #[error("invalid token signature")]
    BadSignature,
    /// The token is structurally valid and authentic but past its time bound.
    #[error("token has expired")]
    Expired,
    /// The presented credential pair was rejected; the request as a whole fails.
    #[error("invalid credential")]
    InvalidCredential,
    /// The refresh token itself has expired; only a new login can recover.
    #[error("session expired, please log in again")]
    SessionExpired,
    /// Signing a well-formed claims payload failed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MalformedToken => AppError::authentication("Malformed token"),
            AuthError::BadSignature => AppError::authentication("Invalid token signature"),
            AuthError::Expired => AppError::authentication("Token has expired"),
            AuthError::InvalidCredential => AppError::authentication("Invalid credential"),
            AuthError::SessionExpired => {
                AppError::session_expired("Session expired, please log in again")
            }
            AuthError::Signing(msg) => AppError::internal(format!("Token signing failed: {msg}")),
        }
    }
}
