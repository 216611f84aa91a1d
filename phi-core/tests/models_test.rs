use phi_core::models::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scoring_is_pure(flags in proptest::collection::vec(any::<bool>(), Feature::COUNT)) {
        let mut v = FeatureVector::new();
        for (f, on) in Feature::ALL.iter().zip(flags) {
            v.set_flag(*f, on);
        }
        let model = Model::initial();
        let first = model.score(&v);
        let second = model.score(&v);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn nudged_weights_stay_clamped(deltas in proptest::collection::vec(-50.0f64..50.0, 1..64)) {
        let mut w = FeatureWeights::initial();
        for (i, d) in deltas.iter().enumerate() {
            w.nudge(Feature::ALL[i % Feature::COUNT], *d);
            prop_assert!(w.within_bounds());
        }
    }
}

#[test]
fn detection_serializes_category_as_type() {
    let d = Detection {
        category: Category::Phone,
        value: "(555) 123-4567".to_string(),
        score: 6.0,
        features: FeatureVector::new(),
        before_context: "Call ".to_string(),
        after_context: " now.".to_string(),
        index: 5,
        note_index: None,
        feedback: None,
    };
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["type"], "phone");
    assert!(json.get("noteIndex").is_none());
    assert_eq!(d.end(), 19);
}

#[test]
fn export_bundle_round_trips_through_json() {
    let example = TrainingExample::new(
        "Johnson",
        "Patient Mr. ",
        " arrived.",
        FeatureVector::new(),
        Label::Phi,
        1.0,
        ExampleSource::Feedback,
    );
    let database = vec![example];
    let bundle = ExportBundle {
        model: Model::initial(),
        stats: Stats::from_examples(&database),
        database,
        export_date: chrono::Utc::now(),
    };
    let json = bundle.to_json_pretty().unwrap();
    assert!(json.contains("\"exportDate\""));
    let back: ExportBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(back.database.len(), 1);
    assert_eq!(back.stats.correct, 1);
    assert!(bundle.file_name().starts_with("phi-training-data-"));
}
