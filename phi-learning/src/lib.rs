//! # phi-learning
//!
//! Everything that changes model weights: the append-only training-example
//! store, the weak-supervision labeler that bootstraps examples from raw
//! notes, the supervised and reward-shaped trainers, corpus sources, and the
//! pretraining pipeline that ties them together.

pub mod corpus;
pub mod pretrain;
pub mod store;
pub mod trainer;
pub mod weak_labeler;

pub use corpus::{generate_synthetic_notes, OfflineCorpus, RemoteCorpus, StaticCorpus};
pub use pretrain::{PretrainOutcome, PretrainPipeline, PretrainProgress, PretrainStage};
pub use store::TrainingStore;
pub use trainer::reward::{EpochSummary, PretrainReport, RewardSchedule};
pub use trainer::supervised::retrain;
pub use weak_labeler::{label_document, WeakLabel};
