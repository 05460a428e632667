//! In-memory user store backed by a concurrent map.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{info, warn};

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_core::types::UserId;

use crate::UserStore;
use crate::password;
use crate::user::User;

/// Concurrent in-memory user store.
///
/// Usernames are the map keys, so uniqueness is enforced by the map's
/// entry API in a single atomic step. Ids are allocated from a process-wide
/// sequence.
#[derive(Debug)]
pub struct MemoryUserStore {
    /// Registered users keyed by username.
    users: DashMap<String, User>,
    /// Next user id to allocate.
    next_id: AtomicI64,
}

impl MemoryUserStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        // Hash before touching the map; Argon2 is deliberately slow and the
        // entry guard holds a shard lock.
        let password_hash = password::hash(password)?;

        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => {
                warn!(username, "Registration rejected, username already taken");
                Err(AppError::conflict("Username is already taken"))
            }
            Entry::Vacant(slot) => {
                let user = User {
                    id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
                    username: username.to_string(),
                    password_hash,
                    created_at: Utc::now(),
                };
                slot.insert(user.clone());
                info!(user_id = %user.id, username, "User registered");
                Ok(user)
            }
        }
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = match self.users.get(username) {
            Some(entry) => entry.value().clone(),
            None => {
                warn!(username, "Login attempt for unknown user");
                return Err(AppError::not_found("User does not exist"));
            }
        };

        if !password::verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, username, "Login attempt with wrong password");
            return Err(AppError::authentication("Invalid username or password"));
        }

        info!(user_id = %user.id, username, "User authenticated");
        Ok(user)
    }
}
