//! Best-effort persistence of the session's blobs.
//!
//! Reads that fail or do not parse come back as `None`; writes that fail are
//! logged. Neither ever reaches the caller: in-memory state stays
//! authoritative for the session.

use std::sync::Arc;

use phi_core::constants::ALL_KEYS;
use phi_core::errors::StorageError;
use phi_core::traits::IKeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

#[derive(Clone)]
pub struct Persistence {
    kv: Arc<dyn IKeyValueStore>,
}

impl Persistence {
    pub fn new(kv: Arc<dyn IKeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load and parse a JSON blob.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "persistence read failed");
                return None;
            }
        };
        match decode(key, &raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "ignoring persisted value");
                None
            }
        }
    }

    /// Serialize and write a JSON blob. Returns whether the write landed.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "serialization failed, not persisted");
                return false;
            }
        };
        match self.kv.set(key, &json) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "persistence write failed");
                false
            }
        }
    }

    /// Delete every session key. Failures are logged per key.
    pub fn clear(&self) {
        for key in ALL_KEYS {
            if let Err(e) = self.kv.delete(key) {
                warn!(key, error = %e, "persistence delete failed");
            }
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::CorruptValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_core::constants::KEY_STATS;
    use phi_core::models::Stats;
    use phi_storage::MemoryKvStore;

    #[test]
    fn corrupt_blob_loads_as_none() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.set(KEY_STATS, "{not json").unwrap();
        let p = Persistence::new(kv);
        assert_eq!(p.load::<Stats>(KEY_STATS), None);
    }

    #[test]
    fn decode_reports_the_corrupt_key() {
        let err = decode::<Stats>(KEY_STATS, "[1,").unwrap_err();
        assert!(matches!(
            err,
            StorageError::CorruptValue { ref key, .. } if key == KEY_STATS
        ));
    }

    #[test]
    fn save_then_load() {
        let p = Persistence::new(Arc::new(MemoryKvStore::new()));
        let stats = Stats {
            correct: 2,
            incorrect: 1,
            total_examples: 3,
            accuracy: 66.0,
        };
        assert!(p.save(KEY_STATS, &stats));
        assert_eq!(p.load::<Stats>(KEY_STATS), Some(stats));
        p.clear();
        assert_eq!(p.load::<Stats>(KEY_STATS), None);
    }
}
