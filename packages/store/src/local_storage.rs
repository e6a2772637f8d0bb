//! # Browser `localStorage` key/value store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! Every method silently degrades when storage is unavailable (private
//! browsing, quota exceeded, no `window`): reads return `None`, writes do
//! nothing. A broken storage reads as "no session".

use web_sys::Storage;

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
