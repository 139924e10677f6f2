//! # Key-value shim — the persistence seam
//!
//! [`KeyValueStore`] abstracts a synchronous, string-keyed store that outlives
//! the process: `window.localStorage` in the browser, a directory of small
//! files on native platforms, and a plain map in tests. Everything the client
//! persists goes through this trait, so the auth layer never needs to know
//! which platform it runs on.
//!
//! ## Implementations
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind `Arc<Mutex<_>>` |
//! | [`crate::FileStore`] | native | one file per key under a base directory |
//! | `LocalStorageStore` | wasm32 + `web` feature | `window.localStorage` |
//!
//! Reads return `Ok(None)` for missing keys. Removing a missing key is not an
//! error.

use crate::error::StoreError;

/// Synchronous string-keyed persistent storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
