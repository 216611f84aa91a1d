//! Error handling for the PHI detector.
//! One error enum per subsystem, `thiserror` only, wrapped by [`PhiError`].

mod config_error;
mod corpus_error;
mod storage_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use storage_error::StorageError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum PhiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{operation} requires explicit confirmation")]
    NotConfirmed { operation: String },
}

pub type PhiResult<T> = Result<T, PhiError>;
