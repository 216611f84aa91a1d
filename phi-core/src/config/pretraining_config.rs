use serde::{Deserialize, Serialize};

use super::defaults;

/// Pretraining pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PretrainingConfig {
    /// Synthetic notes generated when no corpus source yields documents.
    pub synthetic_note_count: usize,
    /// Upper bound on notes fed to the weak labeler.
    pub max_notes: usize,
    /// Remote corpus source identifiers (rows endpoint URLs).
    pub sources: Vec<String>,
    /// Per-request timeout for remote sources.
    pub fetch_timeout_secs: u64,
    /// Pretrain automatically the first time a session opens.
    pub auto_pretrain: bool,
}

impl Default for PretrainingConfig {
    fn default() -> Self {
        Self {
            synthetic_note_count: defaults::DEFAULT_SYNTHETIC_NOTE_COUNT,
            max_notes: defaults::DEFAULT_MAX_NOTES,
            sources: defaults::DEFAULT_CORPUS_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
            auto_pretrain: defaults::DEFAULT_AUTO_PRETRAIN,
        }
    }
}
