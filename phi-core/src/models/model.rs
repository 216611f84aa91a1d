use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureVector, FeatureWeights};
use crate::config::defaults;
use crate::constants::PHI_THRESHOLD;

/// The linear scoring model.
///
/// Models are value objects: the learning engine never mutates one in place,
/// it publishes a successor through [`Model::publish`] with the version bumped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "featureWeights")]
    pub weights: FeatureWeights,
    pub learning_rate: f64,
    pub version: u64,
    pub last_trained: DateTime<Utc>,
    #[serde(default)]
    pub pretrained: bool,
    #[serde(default)]
    pub pretraining_examples: usize,
}

impl Model {
    /// A fresh model with the hand-chosen initial weights.
    pub fn initial() -> Self {
        Self::with_learning_rate(defaults::DEFAULT_LEARNING_RATE)
    }

    /// A fresh model with the initial weights and a custom learning rate.
    pub fn with_learning_rate(learning_rate: f64) -> Self {
        Self {
            weights: FeatureWeights::initial(),
            learning_rate,
            version: 1,
            last_trained: Utc::now(),
            pretrained: false,
            pretraining_examples: 0,
        }
    }

    /// Linear score of a feature vector under this model.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        score(features, &self.weights)
    }

    /// Whether a feature vector classifies as PHI.
    pub fn is_phi(&self, features: &FeatureVector) -> bool {
        is_phi(self.score(features))
    }

    /// Successor model carrying `weights`, with the version bumped by one and
    /// `last_trained` moved forward (never backward).
    pub fn publish(&self, weights: FeatureWeights) -> Model {
        let now = Utc::now();
        Model {
            weights,
            learning_rate: self.learning_rate,
            version: self.version + 1,
            last_trained: now.max(self.last_trained),
            pretrained: self.pretrained,
            pretraining_examples: self.pretraining_examples,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::initial()
    }
}

/// `Σ weights[f] · features[f]` over the catalog.
pub fn score(features: &FeatureVector, weights: &FeatureWeights) -> f64 {
    Feature::ALL
        .iter()
        .map(|&f| weights.get(f) * features.get(f))
        .sum()
}

/// Fixed-threshold classification.
pub fn is_phi(score: f64) -> bool {
    score > PHI_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_model_starts_at_version_one() {
        let m = Model::initial();
        assert_eq!(m.version, 1);
        assert!(!m.pretrained);
        assert_eq!(m.learning_rate, 0.15);
    }

    #[test]
    fn publish_bumps_version_and_time() {
        let m = Model::initial();
        let next = m.publish(m.weights);
        assert_eq!(next.version, 2);
        assert!(next.last_trained >= m.last_trained);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_phi(3.0));
        assert!(is_phi(3.0001));
    }

    #[test]
    fn score_sums_weighted_features() {
        let mut v = FeatureVector::new();
        v.set_flag(Feature::LooksLikeDate, true);
        v.set_flag(Feature::HasNumbers, true);
        let m = Model::initial();
        assert!((m.score(&v) - 5.8).abs() < 1e-9);
    }

    #[test]
    fn model_json_uses_feature_weights_key() {
        let json = serde_json::to_value(Model::initial()).unwrap();
        assert!(json.get("featureWeights").is_some());
        assert!(json.get("learningRate").is_some());
        let back: Model = serde_json::from_value(json).unwrap();
        assert_eq!(back.weights, FeatureWeights::initial());
    }
}
