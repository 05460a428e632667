//! Token pair creation with configurable TTLs.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::types::UserId;

use super::claims::{Claims, TokenClass};
use super::codec::TokenCodec;
use crate::error::AuthError;

/// Creates signed access + refresh token pairs.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    /// Shared signing codec.
    codec: Arc<TokenCodec>,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

/// Result of a successful token pair issuance.
///
/// Both tokens are minted at a single instant for one subject; the access
/// token always expires strictly before the refresh token.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(codec: Arc<TokenCodec>, config: &AuthConfig) -> Self {
        Self {
            codec,
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        }
    }

    /// Mints a fresh token pair for the given subject.
    ///
    /// `now` is computed once so both tokens share an issued-at instant.
    pub fn issue(&self, subject: UserId) -> Result<TokenPair, AuthError> {
        let now = Utc::now();
        let access_exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let refresh_exp = now + chrono::Duration::days(self.refresh_ttl_days);

        let access_claims = Claims {
            sub: subject,
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            class: TokenClass::Access,
        };

        let refresh_claims = Claims {
            sub: subject,
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
            class: TokenClass::Refresh,
        };

        let access_token = self.codec.encode(&access_claims)?;
        let refresh_token = self.codec.encode(&refresh_claims)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }
}
