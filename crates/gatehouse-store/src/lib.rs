//! # gatehouse-store
//!
//! The user store behind the token subsystem: registration with unique
//! usernames, Argon2id credential storage, and password authentication.
//!
//! The token components never see passwords or hashes; they receive a
//! verified [`UserId`](gatehouse_core::types::UserId) from this crate and
//! nothing else.

pub mod memory;
pub mod user;

mod password;

use async_trait::async_trait;

use gatehouse_core::result::AppResult;

pub use memory::MemoryUserStore;
pub use user::User;

/// Black-box user persistence consumed by the HTTP layer.
///
/// Implementations own uniqueness enforcement and credential verification.
/// The in-memory implementation lives in [`memory`]; a database-backed one
/// would implement the same trait.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Registers a new user.
    ///
    /// Fails with a conflict error if the username is already taken.
    async fn register(&self, username: &str, password: &str) -> AppResult<User>;

    /// Authenticates a user by username and password.
    ///
    /// An unknown username and a wrong password are distinct failures:
    /// not-found for the former, authentication for the latter.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User>;
}
