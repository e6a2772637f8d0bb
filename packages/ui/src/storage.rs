//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop / server** (native): files under `<data_dir>/crewdesk/session/`
//! - **WASM without `web`**: memory only

use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStore;

/// Create the platform-appropriate session store.
pub fn make_session_store() -> SessionStore<PlatformStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("crewdesk")
            .join("session");
        SessionStore::new(store::FileStore::new(base))
    }
}
