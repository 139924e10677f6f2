//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop and mobile, where
//! there is no `localStorage`. Each key becomes one file under a base
//! directory, holding the raw value bytes.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── authToken          # raw token string
//! └── authUser           # JSON profile
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/arcade/` |
//! | Linux | `~/.local/share/arcade/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\arcade\` |
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves either the old value or the new one.
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs/latest/dirs/fn.data_dir.html

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.entry_path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        let tmp = self.base.join(format!(".{key}.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.entry_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arcade_test_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = scratch_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        store.set("authToken", "abc").unwrap();

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.get("authToken").unwrap().as_deref(), Some("abc"));
        assert!(store2.get("authUser").unwrap().is_none());

        store2.remove("authToken").unwrap();
        assert!(store.get("authToken").unwrap().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let dir = scratch_dir("overwrite");
        let store = FileStore::new(dir.clone());

        store.set("authUser", "{\"username\":\"alice\"}").unwrap();
        store.set("authUser", "{\"username\":\"bob\"}").unwrap();

        assert_eq!(
            store.get("authUser").unwrap().as_deref(),
            Some("{\"username\":\"bob\"}")
        );
        let names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["authUser".to_string()]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let store = FileStore::new(scratch_dir("missing"));
        assert!(store.get("authToken").unwrap().is_none());
        assert!(store.remove("authToken").is_ok());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new(scratch_dir("keys"));
        for key in ["", ".", "..", "a/b", "a\\b"] {
            assert!(
                matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
