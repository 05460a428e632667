//! Token rotation — exchanging an expired access token for a fresh pair.

use std::sync::Arc;

use tracing::{info, warn};

use super::claims::TokenClass;
use super::codec::TokenCodec;
use super::issuer::{TokenIssuer, TokenPair};
use crate::error::AuthError;

/// Validates a presented token pair and mints a replacement.
///
/// Rotation is stateless: pairing is proven structurally (signatures, class
/// tags, matching subjects), not against a server-side session table, and
/// the old refresh token stays valid until its own natural expiry. A
/// revocation list with an atomic check-and-invalidate would harden this
/// against refresh token theft and is the documented upgrade path.
#[derive(Debug, Clone)]
pub struct TokenRefresher {
    /// Shared verification codec.
    codec: Arc<TokenCodec>,
    /// Issuer used for the full reissue on success.
    issuer: Arc<TokenIssuer>,
}

impl TokenRefresher {
    /// Creates a new refresher.
    pub fn new(codec: Arc<TokenCodec>, issuer: Arc<TokenIssuer>) -> Self {
        Self { codec, issuer }
    }

    /// Performs the rotation protocol:
    ///
    /// 1. Decode the refresh token; it must be authentic, unexpired, and
    ///    carry the refresh class.
    /// 2. Decode the access token permitting expiry; it must be authentic
    ///    and carry the access class.
    /// 3. Cross-check that both tokens assert the same subject.
    /// 4. Mint a brand-new pair for the verified subject.
    ///
    /// An expired refresh token fails with [`AuthError::SessionExpired`]
    /// regardless of the access token's state; every other rejection is
    /// [`AuthError::InvalidCredential`]. No partial pair is ever returned.
    pub fn refresh(&self, access_token: &str, refresh_token: &str) -> Result<TokenPair, AuthError> {
        // Step 1: Decode refresh token
        let refresh_claims = match self.codec.decode(refresh_token) {
            Ok(claims) => claims,
            Err(AuthError::Expired) => {
                info!("Refresh token expired, full re-authentication required");
                return Err(AuthError::SessionExpired);
            }
            Err(AuthError::BadSignature) => {
                warn!("Refresh token failed signature verification");
                return Err(AuthError::InvalidCredential);
            }
            Err(_) => return Err(AuthError::InvalidCredential),
        };

        if refresh_claims.class != TokenClass::Refresh {
            warn!(
                subject = %refresh_claims.sub,
                "Token in refresh position does not carry the refresh class"
            );
            return Err(AuthError::InvalidCredential);
        }

        // Step 2: Decode access token, permitting expiry
        let access_claims = match self.codec.decode_allow_expired(access_token) {
            Ok(claims) => claims,
            Err(AuthError::BadSignature) => {
                warn!(
                    subject = %refresh_claims.sub,
                    "Access token failed signature verification during refresh"
                );
                return Err(AuthError::InvalidCredential);
            }
            Err(_) => return Err(AuthError::InvalidCredential),
        };

        if access_claims.class != TokenClass::Access {
            return Err(AuthError::InvalidCredential);
        }

        // Step 3: Cross-check pairing
        if access_claims.sub != refresh_claims.sub {
            warn!(
                access_subject = %access_claims.sub,
                refresh_subject = %refresh_claims.sub,
                "Token pair subjects do not match"
            );
            return Err(AuthError::InvalidCredential);
        }

        // Step 4: Full reissue
        let pair = self.issuer.issue(refresh_claims.sub)?;
        info!(user_id = %refresh_claims.sub, "Token pair rotated");
        Ok(pair)
    }
}
