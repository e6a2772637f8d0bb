//! # Session store: the persisted half of a login session
//!
//! A session is two independent string slots in a platform key/value storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the bearer credential, verbatim |
//! | [`USER_KEY`] (`"user"`) | the cached [`User`], serialised as JSON |
//!
//! All storage access goes through the [`KeyValueStore`] trait so the same
//! [`SessionStore`] works against the browser's `localStorage`
//! ([`crate::LocalStorageStore`]), a directory on disk ([`crate::FileStore`]) or
//! memory ([`crate::MemoryStore`]).
//!
//! ## Fail-soft reads
//!
//! [`SessionStore::get`] never errors. A missing slot, or a `user` slot that no
//! longer deserialises, reads as `None`. Callers decide what a partial
//! [`Session`] means; the two slots are written without any atomicity.

use crate::models::User;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialised user.
pub const USER_KEY: &str = "user";

/// Synchronous string key/value storage.
///
/// Implementations swallow their own I/O errors: reads degrade to `None` and
/// writes become no-ops.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Raw contents of the two session slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// Both a token and a user are present.
    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Reads and writes the session slots of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| tracing::warn!("Ignoring unreadable stored user: {}", e))
                .ok()
        });
        Session { token, user }
    }

    pub fn set(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        self.set_user(user);
    }

    /// Overwrite only the user slot, keeping whatever token is stored.
    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to serialise user {}: {}", user.id, e),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn ada() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            skills: vec!["c".to_string(), "go".to_string()],
            availability: None,
        }
    }

    #[test]
    fn test_empty_storage_reads_as_absent() {
        let store = SessionStore::new(MemoryStore::new());
        assert_eq!(store.get(), Session::default());
        assert!(!store.get().is_complete());
    }

    #[test]
    fn test_set_then_get() {
        let store = SessionStore::new(MemoryStore::new());
        store.set("t1", &ada());

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user, Some(ada()));
        assert!(session.is_complete());
    }

    #[test]
    fn test_malformed_user_reads_as_none() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "t1");
        storage.set(USER_KEY, "{not json");

        let session = SessionStore::new(storage).get();
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert!(session.user.is_none());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_set_user_keeps_token() {
        let store = SessionStore::new(MemoryStore::new());
        store.set("t1", &ada());

        let renamed = User {
            name: "Ada Lovelace".to_string(),
            ..ada()
        };
        store.set_user(&renamed);

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user, Some(renamed));
    }

    #[test]
    fn test_clear_removes_both_slots() {
        let store = SessionStore::new(MemoryStore::new());
        store.set("t1", &ada());
        store.clear();

        assert_eq!(store.get(), Session::default());
        assert!(store.storage().get(TOKEN_KEY).is_none());
        assert!(store.storage().get(USER_KEY).is_none());
    }
}
