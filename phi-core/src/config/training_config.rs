use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Learning rate given to a freshly created model.
    pub learning_rate: f64,
    /// Epochs per supervised retrain.
    pub supervised_epochs: usize,
    /// Epochs per reward-shaped pretraining run.
    pub pretrain_epochs: usize,
    /// Pretraining rate at epoch 0.
    pub pretrain_initial_rate: f64,
    /// Geometric decay applied to the pretraining rate each epoch.
    pub pretrain_rate_decay: f64,
    /// Seed for epoch shuffles and synthetic notes. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            supervised_epochs: defaults::DEFAULT_SUPERVISED_EPOCHS,
            pretrain_epochs: defaults::DEFAULT_PRETRAIN_EPOCHS,
            pretrain_initial_rate: defaults::DEFAULT_PRETRAIN_INITIAL_RATE,
            pretrain_rate_decay: defaults::DEFAULT_PRETRAIN_RATE_DECAY,
            seed: None,
        }
    }
}
