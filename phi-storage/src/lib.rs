//! # phi-storage
//!
//! [`IKeyValueStore`](phi_core::traits::IKeyValueStore) backends: a
//! process-local map and a single-table SQLite database.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

use phi_core::errors::{PhiError, StorageError};

/// Helper to convert a string error into a PhiError::Storage.
pub(crate) fn to_storage_err(msg: String) -> PhiError {
    StorageError::SqliteError { message: msg }.into()
}
