//! Weak supervision: heuristic labels for raw notes.
//!
//! Only used to bootstrap pretraining examples; never at detection time.
//! Rule matches (dates, phones, MRN-style identifiers) become PHI examples
//! with a 50-character context on either side. Capitalized tokens are then
//! labeled by their surroundings: a place or institution cue makes them
//! not-PHI, otherwise a person cue makes them PHI, otherwise they are
//! skipped.

use std::sync::LazyLock;

use phi_core::constants::CONTEXT_CHARS;
use phi_core::models::{head_chars, tail_chars, ExampleSource, Label, TrainingExample};
use phi_detect::{extract_features, tokenize, ContextWindow};
use regex::Regex;

macro_rules! label_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

label_pattern!(RE_NUMERIC_DATE, r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b");
label_pattern!(
    RE_MONTH_DATE,
    r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\.?\s+\d{1,2},?\s+\d{4}\b"
);
label_pattern!(
    RE_PHONE,
    r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}"
);
label_pattern!(
    RE_RECORD_ID,
    r"(?i)\b(?:MRN|Medical Record|Record #|Chart|Patient ID)[\s:#]*[A-Z0-9]{6,}"
);
label_pattern!(RE_CANDIDATE_NAME, r"^[A-Z][a-z]{2,}$");
label_pattern!(
    RE_PERSON_CUE,
    r"(?i)\b(?:patient|pt|dr|doctor|mr|mrs|ms|miss|prof|mother|father|son|daughter|wife|husband|brother|sister|seen by|evaluated by|examined by|consulted with)\b"
);
label_pattern!(
    RE_PLACE_CUE,
    r"(?i)\b(?:in|from|to|at|near|state|city|hospital|university|college|clinic|center)\b"
);

const DATE_CONFIDENCE: f64 = 1.0;
const PHONE_CONFIDENCE: f64 = 1.0;
const RECORD_ID_CONFIDENCE: f64 = 0.95;
const NAME_CONFIDENCE: f64 = 0.8;
const PLACE_CONFIDENCE: f64 = 0.7;

/// A heuristically labeled span with its surrounding context.
#[derive(Debug, Clone, PartialEq)]
pub struct WeakLabel {
    pub word: String,
    pub before_context: String,
    pub after_context: String,
    pub label: Label,
    pub confidence: f64,
}

impl WeakLabel {
    /// Featurize and wrap as a pretraining example.
    pub fn into_example(self) -> TrainingExample {
        let features = extract_features(&self.word, &self.before_context, &self.after_context);
        TrainingExample::new(
            self.word,
            &self.before_context,
            &self.after_context,
            features,
            self.label,
            self.confidence,
            ExampleSource::Pretrain,
        )
    }
}

/// Label every rule match and capitalized token in `text`.
///
/// Rule matches come first, in rule order (dates, phones, identifiers), then
/// capitalized tokens in document order. A span may be labeled by more than
/// one rule.
pub fn label_document(text: &str) -> Vec<WeakLabel> {
    let mut labels = Vec::new();

    for (regex, confidence) in [
        (&RE_NUMERIC_DATE, DATE_CONFIDENCE),
        (&RE_MONTH_DATE, DATE_CONFIDENCE),
        (&RE_PHONE, PHONE_CONFIDENCE),
        (&RE_RECORD_ID, RECORD_ID_CONFIDENCE),
    ] {
        let Some(re) = regex.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            labels.push(WeakLabel {
                word: m.as_str().to_string(),
                before_context: tail_chars(&text[..m.start()], CONTEXT_CHARS).to_string(),
                after_context: head_chars(&text[m.end()..], CONTEXT_CHARS).to_string(),
                label: Label::Phi,
                confidence,
            });
        }
    }

    let tokens = tokenize(text);
    for (i, token) in tokens.iter().enumerate() {
        if !matches(&RE_CANDIDATE_NAME, token.text) {
            continue;
        }
        let window = ContextWindow::around(&tokens, i);
        let is_place = matches(
            &RE_PLACE_CUE,
            &format!("{} {}", window.before, window.after),
        );
        let is_person = matches(&RE_PERSON_CUE, &window.before);

        let (label, confidence) = if is_place {
            (Label::NotPhi, PLACE_CONFIDENCE)
        } else if is_person {
            (Label::Phi, NAME_CONFIDENCE)
        } else {
            continue;
        };
        labels.push(WeakLabel {
            word: token.text.to_string(),
            before_context: window.clipped_before().to_string(),
            after_context: window.clipped_after().to_string(),
            label,
            confidence,
        });
    }

    labels
}

fn matches(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}
