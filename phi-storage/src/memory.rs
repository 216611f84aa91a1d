use std::collections::HashMap;
use std::sync::Mutex;

use phi_core::errors::{PhiResult, StorageError};
use phi_core::traits::IKeyValueStore;

/// In-process key-value store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> PhiResult<T> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(f(&mut entries))
    }
}

impl IKeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> PhiResult<Option<String>> {
        self.with_entries(|e| e.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PhiResult<()> {
        self.with_entries(|e| {
            e.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> PhiResult<()> {
        self.with_entries(|e| {
            e.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("phi_model").unwrap(), None);
        store.set("phi_model", "{}").unwrap();
        assert_eq!(store.get("phi_model").unwrap().as_deref(), Some("{}"));
        store.set("phi_model", "[]").unwrap();
        assert_eq!(store.get("phi_model").unwrap().as_deref(), Some("[]"));
        store.delete("phi_model").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn deleting_a_missing_key_is_fine() {
        let store = MemoryKvStore::new();
        store.delete("nope").unwrap();
    }
}
