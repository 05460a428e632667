//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and token lifetime configuration.
///
/// The secret and both TTLs are read once at startup and never rotated
/// mid-process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl AuthConfig {
    /// Check the invariants the token subsystem relies on.
    ///
    /// The refresh lifetime must be strictly longer than the access
    /// lifetime; an issued pair always satisfies
    /// `access.expires_at < refresh.expires_at`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.access_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.access_ttl_minutes must be at least 1",
            ));
        }
        if self.refresh_ttl_days * 24 * 60 <= self.access_ttl_minutes {
            return Err(AppError::configuration(format!(
                "auth.refresh_ttl_days ({}) must exceed auth.access_ttl_minutes ({})",
                self.refresh_ttl_days, self.access_ttl_minutes
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}
