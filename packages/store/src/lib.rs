pub mod config;
pub mod error;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{AppConfig, StorageConfig};
pub use error::StoreError;
