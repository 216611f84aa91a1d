use serde::{Deserialize, Serialize};

use super::example::{Label, TrainingExample};

/// Aggregate counters over the training-example store.
///
/// A projection of the store: `correct` counts examples labeled PHI (confirmed
/// detections and weak positives), `incorrect` counts examples labeled not-PHI.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub correct: usize,
    pub incorrect: usize,
    pub total_examples: usize,
    /// Percentage of `correct` over `total_examples`; 0 on an empty store.
    pub accuracy: f64,
}

impl Stats {
    pub fn from_examples(examples: &[TrainingExample]) -> Self {
        let correct = examples.iter().filter(|e| e.label == Label::Phi).count();
        let total_examples = examples.len();
        let accuracy = if total_examples == 0 {
            0.0
        } else {
            correct as f64 / total_examples as f64 * 100.0
        };
        Self {
            correct,
            incorrect: total_examples - correct,
            total_examples,
            accuracy,
        }
    }
}
