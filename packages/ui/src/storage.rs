//! Platform storage constructor.
//!
//! Returns the [`store::KeyValueStore`] the auth state persists into:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Desktop / Mobile** (native): files under `<data_dir>/<dir_name>/`

use store::StorageConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate key-value store.
pub fn make_store(config: &StorageConfig) -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let _ = config;
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(&config.dir_name);
        tracing::debug!(path = %base.display(), "using file-backed auth storage");
        store::FileStore::new(base)
    }
}
