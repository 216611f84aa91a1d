use phi_core::models::{Model, TrainingExample};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::{apply_step, predicted_actual};

/// Perceptron-style batch retrain over the whole store.
///
/// Runs `epochs` shuffled passes; each example moves its nonzero features by
/// `learning_rate * (actual - predicted) * value`. An empty store is a no-op
/// and returns the model unchanged, version included.
pub fn retrain<R: Rng + ?Sized>(
    model: &Model,
    examples: &[TrainingExample],
    epochs: usize,
    rng: &mut R,
) -> Model {
    if examples.is_empty() {
        debug!("retrain skipped: empty store");
        return model.clone();
    }

    let mut weights = model.weights;
    let mut order: Vec<&TrainingExample> = examples.iter().collect();

    for epoch in 0..epochs {
        order.shuffle(rng);
        let mut errors = 0usize;
        for example in &order {
            let (predicted, actual) = predicted_actual(&example.features, example.label, &weights);
            let error = actual - predicted;
            if error != 0.0 {
                errors += 1;
            }
            apply_step(&mut weights, &example.features, model.learning_rate * error);
        }
        debug!(epoch = epoch + 1, errors, "supervised epoch complete");
    }

    let next = model.publish(weights);
    info!(
        examples = examples.len(),
        epochs,
        version = next.version,
        "supervised retrain complete"
    );
    next
}
