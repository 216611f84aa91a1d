//! Value types shared across the workspace.

pub mod detection;
pub mod example;
pub mod export;
pub mod feature;
pub mod model;
pub mod stats;

pub use detection::{BatchResult, Category, Detection, DetectionResult, FeedbackOutcome, NoteResult};
pub use example::{head_chars, tail_chars, ExampleSource, Label, TrainingExample};
pub use export::ExportBundle;
pub use feature::{Feature, FeatureVector, FeatureWeights};
pub use model::{is_phi, score, Model};
pub use stats::Stats;
