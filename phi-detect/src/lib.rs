//! # phi-detect
//!
//! Detection half of the PHI detector: word-boundary tokenization with
//! context windows, compound-shape segmentation, the 21-feature extractor,
//! linear scoring, and left-to-right redaction with running offsets.

pub mod degradation;
pub mod detector;
pub mod features;
pub mod patterns;
pub mod redactor;
pub mod segmenter;
pub mod tokenizer;

pub use detector::{detect, detect_batch, Detector};
pub use features::extract_features;
pub use redactor::{redact, RedactionSpan, Replacement};
pub use segmenter::segment;
pub use tokenizer::{tokenize, ContextWindow, Token, TokenKind};
