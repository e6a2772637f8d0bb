//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a small file. It is used on desktop platforms to keep a login session
//! across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token      # bearer token
//! └── user       # JSON-serialised user
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/crewdesk/session/` on Linux.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write session entry {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::SessionStore;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("session");

        let user = User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            ..User::default()
        };
        SessionStore::new(FileStore::new(base.clone())).set("t1", &user);

        // Re-open from same directory
        let session = SessionStore::new(FileStore::new(base)).get();
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user, Some(user));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.remove("token");
        assert!(store.get("token").is_none());
    }
}
