use std::fmt;

use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureVector};

/// PHI type assigned to a positive detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Date,
    Phone,
    Email,
    Ssn,
    Mrn,
    ZipCode,
    Name,
    Address,
    Unknown,
}

impl Category {
    /// Pick the category for a positive token. Shape cues are checked before
    /// relational ones; `Unknown` catches everything else.
    pub fn classify(features: &FeatureVector) -> Category {
        if features.is_set(Feature::LooksLikeDate) {
            Category::Date
        } else if features.is_set(Feature::LooksLikePhone) {
            Category::Phone
        } else if features.is_set(Feature::LooksLikeEmail) {
            Category::Email
        } else if features.is_set(Feature::LooksLikeSsn) {
            Category::Ssn
        } else if features.is_set(Feature::LooksLikeMrn) {
            Category::Mrn
        } else if features.is_set(Feature::LooksLikeZip) {
            Category::ZipCode
        } else if features.is_set(Feature::HasTitleBefore)
            || features.is_set(Feature::NearPatientWord)
        {
            Category::Name
        } else if features.is_set(Feature::LooksLikeAddress) {
            Category::Address
        } else {
            Category::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Date => "date",
            Category::Phone => "phone",
            Category::Email => "email",
            Category::Ssn => "ssn",
            Category::Mrn => "mrn",
            Category::ZipCode => "zip_code",
            Category::Name => "name",
            Category::Address => "address",
            Category::Unknown => "unknown",
        }
    }

    /// `[REDACTED:<TYPE>]` with the type upper-cased.
    pub fn placeholder(self) -> String {
        format!("[REDACTED:{}]", self.as_str().to_uppercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human judgment recorded against a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Correct,
    Incorrect,
}

/// A token the current model scored as PHI during one detect pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    #[serde(rename = "type")]
    pub category: Category,
    pub value: String,
    pub score: f64,
    pub features: FeatureVector,
    pub before_context: String,
    pub after_context: String,
    /// Byte offset of `value` in the source note.
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackOutcome>,
}

impl Detection {
    /// Byte offset one past the end of `value`.
    pub fn end(&self) -> usize {
        self.index + self.value.len()
    }
}

/// Outcome of detecting PHI in one note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub detections: Vec<Detection>,
    pub redacted: String,
}

/// One note's outcome inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResult {
    pub original_note: String,
    pub detections: Vec<Detection>,
    pub redacted: String,
}

/// Outcome of detecting PHI across a batch of notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub results: Vec<NoteResult>,
    #[serde(rename = "totalPHI")]
    pub total_phi: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(flags: &[Feature]) -> FeatureVector {
        let mut v = FeatureVector::new();
        for &f in flags {
            v.set_flag(f, true);
        }
        v
    }

    #[test]
    fn shape_cues_win_over_relational_cues() {
        let v = with(&[Feature::HasTitleBefore, Feature::LooksLikePhone]);
        assert_eq!(Category::classify(&v), Category::Phone);
    }

    #[test]
    fn date_outranks_everything() {
        let v = with(&[
            Feature::LooksLikeSsn,
            Feature::LooksLikeDate,
            Feature::LooksLikePhone,
        ]);
        assert_eq!(Category::classify(&v), Category::Date);
    }

    #[test]
    fn name_outranks_address() {
        let v = with(&[Feature::NearPatientWord, Feature::LooksLikeAddress]);
        assert_eq!(Category::classify(&v), Category::Name);
        let v = with(&[Feature::LooksLikeAddress]);
        assert_eq!(Category::classify(&v), Category::Address);
    }

    #[test]
    fn no_cue_is_unknown() {
        assert_eq!(Category::classify(&FeatureVector::new()), Category::Unknown);
    }

    #[test]
    fn placeholders_are_upper_cased() {
        assert_eq!(Category::Date.placeholder(), "[REDACTED:DATE]");
        assert_eq!(Category::ZipCode.placeholder(), "[REDACTED:ZIP_CODE]");
    }
}
