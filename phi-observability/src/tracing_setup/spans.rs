//! Span definitions per operation: detect, batch, feedback, retrain, pretrain.

/// Create a detect span.
#[macro_export]
macro_rules! detect_span {
    ($text_len:expr, $model_version:expr) => {
        tracing::info_span!("phi.detect", text_len = $text_len, model_version = $model_version)
    };
}

/// Create a batch detect span.
#[macro_export]
macro_rules! batch_span {
    ($note_count:expr) => {
        tracing::info_span!("phi.batch", note_count = $note_count)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($category:expr, $correct:expr) => {
        tracing::info_span!("phi.feedback", category = %$category, correct = $correct)
    };
}

/// Create a retrain span.
#[macro_export]
macro_rules! retrain_span {
    ($store_len:expr) => {
        tracing::info_span!("phi.retrain", store_len = $store_len)
    };
}

/// Create a pretrain span.
#[macro_export]
macro_rules! pretrain_span {
    ($source_count:expr) => {
        tracing::info_span!("phi.pretrain", source_count = $source_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DETECT: &str = "phi.detect";
    pub const BATCH: &str = "phi.batch";
    pub const FEEDBACK: &str = "phi.feedback";
    pub const RETRAIN: &str = "phi.retrain";
    pub const PRETRAIN: &str = "phi.pretrain";
}
