//! # phi-core
//!
//! Foundation crate for the PHI detector.
//! Defines the feature catalog, model, training examples, detections,
//! traits, errors, config, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PhiConfig;
pub use errors::{PhiError, PhiResult};
pub use models::{
    BatchResult, Category, Detection, DetectionResult, ExampleSource, ExportBundle, Feature,
    FeatureVector, FeatureWeights, FeedbackOutcome, Label, Model, Stats, TrainingExample,
};
