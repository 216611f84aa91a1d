use phi_core::models::Model;
use phi_detect::{detect, extract_features, redact, segment, tokenize, Replacement};
use proptest::prelude::*;

// ── Tokenization is lossless ──────────────────────────────────────────────

proptest! {
    #[test]
    fn tokenize_reconstructs_input(text in "\\PC{0,200}") {
        let tokens = tokenize(&text);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, text.clone());
        for t in &tokens {
            prop_assert_eq!(&text[t.start..t.end()], t.text);
        }
    }

    #[test]
    fn segment_reconstructs_input(
        text in "[A-Za-z0-9 ()/\\-.,@]{0,120}"
    ) {
        let tokens = segment(&text);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, text.clone());
        let mut cursor = 0;
        for t in &tokens {
            prop_assert_eq!(t.start, cursor);
            cursor = t.end();
        }
    }
}

// ── Redaction offsets ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn redaction_replaces_each_span_and_keeps_the_rest(
        words in prop::collection::vec("[a-z]{1,8}", 1..12),
        mask in prop::collection::vec(any::<bool>(), 12),
        placeholder in "\\[[A-Z]{1,12}\\]"
    ) {
        let text = words.join(" ");
        let mut spans = Vec::new();
        let mut expected = Vec::new();
        let mut start = 0;
        for (i, w) in words.iter().enumerate() {
            if mask[i] {
                spans.push(Replacement {
                    start,
                    original: w.clone(),
                    placeholder: placeholder.clone(),
                });
                expected.push(placeholder.clone());
            } else {
                expected.push(w.clone());
            }
            start += w.len() + 1;
        }
        prop_assert_eq!(redact(&text, &spans), expected.join(" "));
    }

    #[test]
    fn detect_redaction_matches_detections(text in "[A-Za-z0-9 ().,/\\-]{0,120}") {
        let model = Model::initial();
        let result = detect(&text, &model);
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for d in &result.detections {
            prop_assert!(d.index >= cursor);
            prop_assert_eq!(&text[d.index..d.end()], d.value.as_str());
            rebuilt.push_str(&text[cursor..d.index]);
            rebuilt.push_str(&d.category.placeholder());
            cursor = d.end();
        }
        rebuilt.push_str(&text[cursor..]);
        prop_assert_eq!(result.redacted, rebuilt);
    }
}

// ── Scoring is pure ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scoring_twice_gives_the_same_score(
        word in "[A-Za-z0-9]{1,12}",
        before in "[A-Za-z .]{0,40}",
        after in "[A-Za-z .]{0,40}"
    ) {
        let model = Model::initial();
        let features = extract_features(&word, &before, &after);
        let again = extract_features(&word, &before, &after);
        prop_assert_eq!(&features, &again);
        prop_assert_eq!(model.score(&features), model.score(&features));
    }

    #[test]
    fn features_are_binary(
        word in "\\PC{0,20}",
        before in "\\PC{0,40}",
        after in "\\PC{0,40}"
    ) {
        let features = extract_features(&word, &before, &after);
        for (_, v) in features.iter() {
            prop_assert!(v == 0.0 || v == 1.0);
        }
    }
}
