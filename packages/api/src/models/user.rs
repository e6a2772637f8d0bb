//! # Stored user record (server only)
//!
//! [`UserRecord`] is what the [`crate::db::UserRepository`] keeps: the
//! client-safe [`User`] plus the Argon2 `password_hash`.
//! [`UserRecord::to_user`] projects it back to the shape sent over the wire,
//! so the hash never leaves the server.

use store::User;

use super::ProfilePatch;

/// Full user record as persisted by the server.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: Option<String>,
}

impl UserRecord {
    pub fn new(user: User, password_hash: Option<String>) -> Self {
        Self {
            user,
            password_hash,
        }
    }

    /// Convert to User for client consumption.
    pub fn to_user(&self) -> User {
        self.user.clone()
    }

    /// Apply a profile patch to the public part of the record.
    pub fn apply(&mut self, patch: ProfilePatch) {
        patch.apply(&mut self.user);
    }
}
