//! Reward-shaped pretraining.
//!
//! Each epoch uses `rate = initial_rate * decay^epoch`. Per example the
//! reward is `+confidence` when the prediction is right and `-confidence`
//! when it is wrong, and every nonzero feature moves by
//! `rate * reward * (actual - predicted) * value`. Correct predictions leave
//! weights untouched since `actual - predicted` is zero.

use phi_core::config::TrainingConfig;
use phi_core::models::{Model, TrainingExample};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{apply_step, predicted_actual};

/// Epoch count and geometric learning-rate decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardSchedule {
    pub epochs: usize,
    pub initial_rate: f64,
    pub decay: f64,
}

impl RewardSchedule {
    /// Learning rate for a zero-based epoch.
    pub fn rate(&self, epoch: usize) -> f64 {
        self.initial_rate * self.decay.powi(epoch as i32)
    }
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self::from(&TrainingConfig::default())
    }
}

impl From<&TrainingConfig> for RewardSchedule {
    fn from(config: &TrainingConfig) -> Self {
        Self {
            epochs: config.pretrain_epochs,
            initial_rate: config.pretrain_initial_rate,
            decay: config.pretrain_rate_decay,
        }
    }
}

/// Outcome of one pretraining epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochSummary {
    /// One-based.
    pub epoch: usize,
    pub rate: f64,
    /// Sum of positive rewards over the example count.
    pub avg_reward: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PretrainReport {
    pub examples: usize,
    pub epochs: Vec<EpochSummary>,
}

/// Run the reward-shaped schedule over `examples` and publish the result.
///
/// The successor has its version bumped, `pretrained` set and
/// `pretraining_examples` equal to `examples.len()`. `on_epoch` is called
/// after each epoch with its summary.
pub fn pretrain<R, F>(
    model: &Model,
    examples: &[TrainingExample],
    schedule: &RewardSchedule,
    rng: &mut R,
    mut on_epoch: F,
) -> (Model, PretrainReport)
where
    R: Rng + ?Sized,
    F: FnMut(&EpochSummary),
{
    let mut weights = model.weights;
    let mut order: Vec<&TrainingExample> = examples.iter().collect();
    let mut report = PretrainReport {
        examples: examples.len(),
        epochs: Vec::with_capacity(schedule.epochs),
    };

    for epoch in 0..schedule.epochs {
        let rate = schedule.rate(epoch);
        order.shuffle(rng);

        let mut epoch_reward = 0.0;
        for example in &order {
            let (predicted, actual) = predicted_actual(&example.features, example.label, &weights);
            let reward = if predicted == actual {
                epoch_reward += example.confidence;
                example.confidence
            } else {
                -example.confidence
            };
            apply_step(
                &mut weights,
                &example.features,
                rate * reward * (actual - predicted),
            );
        }

        let avg_reward = if order.is_empty() {
            0.0
        } else {
            epoch_reward / order.len() as f64
        };
        let summary = EpochSummary {
            epoch: epoch + 1,
            rate,
            avg_reward,
        };
        debug!(epoch = summary.epoch, rate, avg_reward, "pretrain epoch complete");
        on_epoch(&summary);
        report.epochs.push(summary);
    }

    let mut next = model.publish(weights);
    next.pretrained = true;
    next.pretraining_examples = examples.len();
    info!(
        examples = examples.len(),
        epochs = schedule.epochs,
        version = next.version,
        "reward-shaped pretraining complete"
    );
    (next, report)
}
