//! Golden detection and redaction cases under the default model.

use phi_core::models::Model;
use phi_detect::detect;
use test_fixtures::load_fixture_value;

#[test]
fn golden_redaction_scenarios() {
    let fixture = load_fixture_value("golden/redaction/scenarios.json");
    let model = Model::initial();
    let cases = fixture["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let id = case["id"].as_str().unwrap_or("?");
        let text = case["text"].as_str().unwrap();
        let result = detect(text, &model);

        assert_eq!(
            result.redacted,
            case["expected_redacted"].as_str().unwrap(),
            "Case '{}': redacted output mismatch",
            id
        );

        let expected = case["expected_detections"].as_array().unwrap();
        assert_eq!(
            result.detections.len(),
            expected.len(),
            "Case '{}': detection count mismatch: {:?}",
            id,
            result
                .detections
                .iter()
                .map(|d| d.value.as_str())
                .collect::<Vec<_>>()
        );
        for (got, want) in result.detections.iter().zip(expected) {
            assert_eq!(got.value, want["value"].as_str().unwrap(), "Case '{}'", id);
            assert_eq!(got.category.as_str(), want["type"].as_str().unwrap(), "Case '{}'", id);
            assert_eq!(got.index as u64, want["index"].as_u64().unwrap(), "Case '{}'", id);
            assert!(got.score > 3.0, "Case '{}': score {}", id, got.score);
        }
    }
}
