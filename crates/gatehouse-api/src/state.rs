//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gatehouse_auth::{TokenIssuer, TokenRefresher};
use gatehouse_core::config::AppConfig;
use gatehouse_store::UserStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User registration and credential verification.
    pub users: Arc<dyn UserStore>,
    /// Token pair issuance.
    pub issuer: Arc<TokenIssuer>,
    /// Token rotation.
    pub refresher: Arc<TokenRefresher>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
