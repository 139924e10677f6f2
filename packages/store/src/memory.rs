use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing.
///
/// Clones share the same map, so a clone behaves like the same storage seen
/// after a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("authToken").unwrap().is_none());

        store.set("authToken", "abc").unwrap();
        assert_eq!(store.get("authToken").unwrap().as_deref(), Some("abc"));

        store.set("authToken", "def").unwrap();
        assert_eq!(store.get("authToken").unwrap().as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("authToken").unwrap();
        assert!(store.get("authToken").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("nothing-here").is_ok());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::with_entries([("authToken", "abc")]);
        let other = store.clone();

        other.set("authUser", "{}").unwrap();

        assert_eq!(store.get("authUser").unwrap().as_deref(), Some("{}"));
        assert_eq!(other.get("authToken").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_reference_is_a_store() {
        fn write_through<S: KeyValueStore>(store: S) {
            store.set("k", "v").unwrap();
        }

        let store = MemoryStore::new();
        write_through(&store);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
