//! Feature extraction: token + context strings → [`FeatureVector`].
//!
//! Pure and total. Every call fills the whole catalog; rules are evaluated
//! independently, so one token may trigger several.

use phi_core::models::{Feature, FeatureVector};

use crate::patterns::{cues, is_match, shapes};

/// Clinical-role words, matched as substrings of either context.
const PATIENT_WORDS: [&str; 7] = [
    "patient", "pt", "evaluated", "examined", "treated", "saw", "visited",
];

/// Geographic words, matched against the last few words of the before-context.
const GEOGRAPHIC_WORDS: [&str; 8] = [
    "in", "from", "to", "at", "near", "state", "city", "country",
];

/// How many trailing before-context words the geographic cue inspects.
const GEOGRAPHIC_LOOKBACK: usize = 3;

/// Institution words, matched as substrings of the after-context.
const INSTITUTION_WORDS: [&str; 6] = [
    "hospital",
    "university",
    "college",
    "clinic",
    "center",
    "institute",
];

const COMMON_WORDS: [&str; 10] = [
    "the", "and", "for", "with", "this", "that", "hospital", "clinic", "medical", "health",
];

/// Compute the full feature vector for `word` between `before` and `after`.
pub fn extract_features(word: &str, before: &str, after: &str) -> FeatureVector {
    let mut f = FeatureVector::new();
    let before_lower = before.to_lowercase();
    let after_lower = after.to_lowercase();

    // Context cues.
    f.set_flag(
        Feature::HasTitleBefore,
        is_match(&cues::RE_TITLE_BEFORE, before),
    );
    f.set_flag(
        Feature::HasPossessive,
        is_match(&cues::RE_POSSESSIVE_AFTER, after),
    );
    f.set_flag(
        Feature::NearPatientWord,
        PATIENT_WORDS
            .iter()
            .any(|w| before_lower.contains(w) || after_lower.contains(w)),
    );
    f.set_flag(
        Feature::NearGeographicWord,
        near_geographic_word(&before_lower),
    );
    f.set_flag(
        Feature::NearInstitutionWord,
        INSTITUTION_WORDS.iter().any(|w| after_lower.contains(w)),
    );
    f.set_flag(
        Feature::CapitalizedSequence,
        after
            .split_whitespace()
            .next()
            .is_some_and(|first| is_match(&cues::RE_CAPITALIZED_WORD, first)),
    );
    f.set_flag(
        Feature::AfterPreposition,
        is_match(&cues::RE_PREPOSITION_BEFORE, before),
    );
    f.set_flag(
        Feature::NearRelationshipWord,
        is_match(&cues::RE_KINSHIP, before) || is_match(&cues::RE_KINSHIP, after),
    );
    f.set_flag(Feature::HasSuffixIndicator, is_match(&cues::RE_SUFFIX, after));
    f.set_flag(
        Feature::InQuotes,
        before.contains('"') && after.contains('"'),
    );

    // Shape detectors.
    for shape in shapes::all_shapes() {
        f.set_flag(shape.feature, shape.matches(word, before, after));
    }

    // Surface cues.
    let char_len = word.chars().count();
    f.set_flag(
        Feature::IsAllCaps,
        char_len > 1 && word == word.to_uppercase(),
    );
    f.set_flag(
        Feature::HasNumbers,
        word.chars().any(|c| c.is_ascii_digit()),
    );
    f.set_flag(Feature::LengthOver10, char_len > 10);
    f.set_flag(
        Feature::CommonWord,
        COMMON_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)),
    );

    f
}

/// Whether one of the last few whitespace-separated words of the (lowercased)
/// before-context is a geographic word.
fn near_geographic_word(before_lower: &str) -> bool {
    before_lower
        .split_whitespace()
        .rev()
        .take(GEOGRAPHIC_LOOKBACK)
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|w| GEOGRAPHIC_WORDS.contains(&w))
}
