use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature::FeatureVector;
use crate::constants::CONTEXT_CHARS;

/// Ground-truth label of a training example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Phi,
    NotPhi,
}

impl Label {
    pub fn from_is_phi(is_phi: bool) -> Self {
        if is_phi {
            Label::Phi
        } else {
            Label::NotPhi
        }
    }

    /// 1 for PHI, 0 otherwise.
    pub fn target(self) -> f64 {
        match self {
            Label::Phi => 1.0,
            Label::NotPhi => 0.0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Phi => "phi",
            Label::NotPhi => "not_phi",
        })
    }
}

/// Where a training example came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleSource {
    /// A human confirmed or rejected a detection.
    Feedback,
    /// Produced by the weak labeler during pretraining.
    Pretrain,
}

/// One labeled example. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingExample {
    pub id: String,
    pub word: String,
    pub before_context: String,
    pub after_context: String,
    pub features: FeatureVector,
    pub label: Label,
    pub confidence: f64,
    pub source: ExampleSource,
    pub timestamp: DateTime<Utc>,
}

impl TrainingExample {
    /// Build an example with a fresh id and timestamp. Contexts are clipped
    /// to the stored width and confidence to `[0, 1]`.
    pub fn new(
        word: impl Into<String>,
        before_context: &str,
        after_context: &str,
        features: FeatureVector,
        label: Label,
        confidence: f64,
        source: ExampleSource,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            word: word.into(),
            before_context: tail_chars(before_context, CONTEXT_CHARS).to_string(),
            after_context: head_chars(after_context, CONTEXT_CHARS).to_string(),
            features,
            label,
            confidence: confidence.clamp(0.0, 1.0),
            source,
            timestamp: Utc::now(),
        }
    }
}

/// The last `n` characters of `s`.
pub fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// The first `n` characters of `s`.
pub fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexts_are_clipped_to_fifty_chars() {
        let long = "x".repeat(80);
        let ex = TrainingExample::new(
            "Smith",
            &format!("{long}BEFORE"),
            &format!("AFTER{long}"),
            FeatureVector::new(),
            Label::Phi,
            1.0,
            ExampleSource::Feedback,
        );
        assert_eq!(ex.before_context.chars().count(), 50);
        assert!(ex.before_context.ends_with("BEFORE"));
        assert_eq!(ex.after_context.chars().count(), 50);
        assert!(ex.after_context.starts_with("AFTER"));
    }

    #[test]
    fn clipping_respects_char_boundaries() {
        assert_eq!(tail_chars("héllo", 3), "llo");
        assert_eq!(head_chars("héllo", 2), "hé");
        assert_eq!(head_chars("ab", 10), "ab");
        assert_eq!(tail_chars("", 5), "");
    }

    #[test]
    fn label_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Label::NotPhi).unwrap(), "\"not_phi\"");
        assert_eq!(Label::Phi.target(), 1.0);
        assert_eq!(Label::from_is_phi(false), Label::NotPhi);
    }

    #[test]
    fn confidence_is_clamped() {
        let ex = TrainingExample::new(
            "x",
            "",
            "",
            FeatureVector::new(),
            Label::Phi,
            1.7,
            ExampleSource::Pretrain,
        );
        assert_eq!(ex.confidence, 1.0);
    }
}
