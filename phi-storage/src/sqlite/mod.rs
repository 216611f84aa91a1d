//! SQLite-backed key-value store.

pub mod pragmas;

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use phi_core::errors::{PhiResult, StorageError};
use phi_core::traits::IKeyValueStore;

use crate::to_storage_err;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// One `kv` table behind a single mutex-guarded connection.
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Open (creating if needed) a database file.
    pub fn open(path: &Path) -> PhiResult<Self> {
        let conn = Connection::open(path).map_err(|e| StorageError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        pragmas::apply_pragmas(&conn)?;
        let store = Self::from_connection(conn)?;
        debug!(path = %path.display(), "sqlite kv store opened");
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> PhiResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> PhiResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| to_storage_err(format!("create kv table: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with the connection held.
    pub fn with_conn<F, T>(&self, f: F) -> PhiResult<T>
    where
        F: FnOnce(&Connection) -> PhiResult<T>,
    {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&conn)
    }

    /// Every stored key, sorted.
    pub fn keys(&self) -> PhiResult<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT key FROM kv ORDER BY key")
                .map_err(|e| to_storage_err(e.to_string()))?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(|e| to_storage_err(e.to_string()))?;
            let keys = rows
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(keys)
        })
    }
}

impl IKeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> PhiResult<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| to_storage_err(format!("get {key}: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> PhiResult<()> {
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| to_storage_err(format!("set {key}: {e}")))?;
            Ok(())
        })
    }

    fn delete(&self, key: &str) -> PhiResult<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
                .map_err(|e| to_storage_err(format!("delete {key}: {e}")))?;
            Ok(())
        })
    }
}
