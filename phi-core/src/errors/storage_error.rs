/// Persistence-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("failed to open store at {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    #[error("stored value for key {key} is corrupt: {reason}")]
    CorruptValue { key: String, reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
