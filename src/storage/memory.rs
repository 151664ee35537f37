//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// In-memory key-value store backed by a mutex-guarded map.
///
/// Cloning yields a handle onto the same underlying map, matching the
/// shared-manager pattern used across the crate.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove_roundtrip() {
        let store = MemoryStorage::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));

        store.set("users", "[1]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[1]"));

        store.remove("users").unwrap();
        assert!(store.get("users").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let store = MemoryStorage::new();
        assert!(store.remove("never_set").is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStorage::new();
        let handle = store.clone();
        handle.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
