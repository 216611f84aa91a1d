// Single source of truth for all default values.

// --- Training ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.15;
pub const DEFAULT_SUPERVISED_EPOCHS: usize = 3;
pub const DEFAULT_PRETRAIN_EPOCHS: usize = 10;
pub const DEFAULT_PRETRAIN_INITIAL_RATE: f64 = 0.2;
pub const DEFAULT_PRETRAIN_RATE_DECAY: f64 = 0.95;

// --- Pretraining ---
pub const DEFAULT_SYNTHETIC_NOTE_COUNT: usize = 1_000;
pub const DEFAULT_MAX_NOTES: usize = 1_000;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTO_PRETRAIN: bool = true;
pub const DEFAULT_CORPUS_SOURCES: [&str; 2] = [
    "https://datasets-server.huggingface.co/rows?dataset=mteb/mtsamples&config=default&split=train&offset=0&length=100",
    "https://datasets-server.huggingface.co/rows?dataset=medical-notes-small&config=default&split=train&offset=0&length=50",
];

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "phi.db";
pub const DEFAULT_IN_MEMORY: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
