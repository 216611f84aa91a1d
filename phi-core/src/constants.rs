/// A token is PHI when its score is strictly above this value.
pub const PHI_THRESHOLD: f64 = 3.0;

/// Every weight lies in `[-WEIGHT_CLAMP, WEIGHT_CLAMP]` after an update.
pub const WEIGHT_CLAMP: f64 = 10.0;

/// Tokens taken on each side of a focal token.
pub const CONTEXT_TOKENS: usize = 10;

/// Characters kept on each side when a context is stored in an example.
pub const CONTEXT_CHARS: usize = 50;

/// Persistence keys.
pub const KEY_MODEL: &str = "phi_model";
pub const KEY_TRAINING_DB: &str = "phi_training_db";
pub const KEY_STATS: &str = "phi_stats";
pub const KEY_PRETRAINED: &str = "phi_pretrained";

/// All persistence keys, in reset order.
pub const ALL_KEYS: [&str; 4] = [KEY_MODEL, KEY_TRAINING_DB, KEY_STATS, KEY_PRETRAINED];
