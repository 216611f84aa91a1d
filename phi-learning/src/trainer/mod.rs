//! Weight-update procedures.
//!
//! Both trainers read a [`Model`](phi_core::models::Model) and publish a
//! successor; neither mutates the input. Every step clamps the touched
//! weights to `[-WEIGHT_CLAMP, WEIGHT_CLAMP]`.

pub mod reward;
pub mod supervised;

use phi_core::models::{FeatureVector, FeatureWeights, Label};

/// `(predicted, actual)` as 0/1 values for one example under `weights`.
pub(crate) fn predicted_actual(
    features: &FeatureVector,
    label: Label,
    weights: &FeatureWeights,
) -> (f64, f64) {
    let predicted = if phi_core::models::is_phi(phi_core::models::score(features, weights)) {
        1.0
    } else {
        0.0
    };
    (predicted, label.target())
}

/// `w[f] += step * value[f]` for every nonzero feature, clamped.
pub(crate) fn apply_step(weights: &mut FeatureWeights, features: &FeatureVector, step: f64) {
    if step == 0.0 {
        return;
    }
    for (feature, value) in features.nonzero() {
        weights.nudge(feature, step * value);
    }
}
