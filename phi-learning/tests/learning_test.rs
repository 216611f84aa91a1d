//! Integration tests for phi-learning: labeler scenarios, trainer
//! bookkeeping and weight clamping.

use phi_core::config::{PretrainingConfig, TrainingConfig};
use phi_core::models::{ExampleSource, Feature, FeatureVector, Label, Model, TrainingExample};
use phi_detect::detect;
use phi_learning::trainer::reward::pretrain;
use phi_learning::{
    label_document, retrain, OfflineCorpus, PretrainPipeline, RewardSchedule, TrainingStore,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn denver_is_labeled_not_phi_and_not_detected() {
    let text = "Traveling from Denver to the clinic.";
    let labels = label_document(text);
    let denver = labels.iter().find(|l| l.word == "Denver").unwrap();
    assert_eq!(denver.label, Label::NotPhi);

    let example = denver.clone().into_example();
    assert!(example.features.is_set(Feature::NearGeographicWord));
    let model = Model::initial();
    assert!(model.score(&example.features) < 0.0);
    assert!(detect(text, &model).detections.is_empty());
}

#[test]
fn feedback_sized_store_retrains() {
    let model = Model::initial();
    let result = detect("Patient Mr. Johnson arrived.", &model);
    let d = &result.detections[0];
    let mut store = TrainingStore::new();
    store.push(TrainingExample::new(
        d.value.clone(),
        &d.before_context,
        &d.after_context,
        d.features,
        Label::Phi,
        1.0,
        ExampleSource::Feedback,
    ));
    let mut rng = StdRng::seed_from_u64(0);
    let next = retrain(&model, store.examples(), 3, &mut rng);
    assert_eq!(next.version, model.version + 1);
    assert_eq!(store.stats().correct, 1);
}

#[test]
fn seeded_pretraining_is_reproducible() {
    let config = PretrainingConfig {
        synthetic_note_count: 30,
        ..PretrainingConfig::default()
    };
    let training = TrainingConfig::default();
    let pipeline = PretrainPipeline::new(&OfflineCorpus, &config, &training);

    let run = |seed| {
        let mut store = TrainingStore::new();
        let mut rng = StdRng::seed_from_u64(seed);
        pipeline
            .run(&Model::initial(), &mut store, &mut rng, |_| {})
            .model
            .weights
    };
    assert_eq!(run(17), run(17));
}

fn arb_example() -> impl Strategy<Value = TrainingExample> {
    (
        prop::collection::vec(any::<bool>(), Feature::COUNT),
        any::<bool>(),
        0.0f64..=1.0,
    )
        .prop_map(|(flags, phi, confidence)| {
            let mut features = FeatureVector::new();
            for (feature, on) in Feature::ALL.iter().zip(flags) {
                features.set_flag(*feature, on);
            }
            TrainingExample::new(
                "w",
                "",
                "",
                features,
                Label::from_is_phi(phi),
                confidence,
                ExampleSource::Pretrain,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn supervised_weights_stay_clamped(
        examples in prop::collection::vec(arb_example(), 1..40),
        epochs in 1usize..30,
        rate in 0.01f64..5.0,
        seed in any::<u64>()
    ) {
        let model = Model::with_learning_rate(rate);
        let mut rng = StdRng::seed_from_u64(seed);
        let next = retrain(&model, &examples, epochs, &mut rng);
        prop_assert!(next.weights.within_bounds());
        prop_assert_eq!(next.version, model.version + 1);
    }

    #[test]
    fn pretrained_weights_stay_clamped(
        examples in prop::collection::vec(arb_example(), 0..40),
        initial_rate in 0.01f64..20.0,
        seed in any::<u64>()
    ) {
        let schedule = RewardSchedule { epochs: 10, initial_rate, decay: 0.95 };
        let model = Model::initial();
        let mut rng = StdRng::seed_from_u64(seed);
        let (next, report) = pretrain(&model, &examples, &schedule, &mut rng, |_| {});
        prop_assert!(next.weights.within_bounds());
        prop_assert_eq!(next.version, model.version + 1);
        prop_assert!(next.last_trained >= model.last_trained);
        prop_assert_eq!(report.epochs.len(), 10);
    }
}
