//! Signed token encoding and verification.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gatehouse_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Encodes and verifies signed tokens (HMAC-SHA256).
///
/// The codec is pure over the injected secret and the current wall-clock
/// time: no side effects, no shared mutable state. The signature is verified
/// before any claim field is deserialized, so no field of a tampered token
/// is ever trusted.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation with expiry enforcement.
    validation: Validation,
    /// Validation with expiry enforcement switched off.
    validation_allow_expired: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        let mut validation_allow_expired = validation.clone();
        validation_allow_expired.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            validation_allow_expired,
        }
    }

    /// Encodes and signs a claims payload.
    ///
    /// Deterministic for a given payload and secret; fails only if the
    /// signing layer itself fails.
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Decodes a token, enforcing signature, structure, and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_with(token, &self.validation)
    }

    /// Decodes a token, enforcing signature and structure but not expiry.
    ///
    /// Used when inspecting an access token during refresh, where being
    /// expired is the expected state rather than a failure.
    pub fn decode_allow_expired(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_with(token, &self.validation_allow_expired)
    }

    fn decode_with(&self, token: &str, validation: &Validation) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::BadSignature,
                _ => AuthError::MalformedToken,
            })?;

        Ok(token_data.claims)
    }
}
