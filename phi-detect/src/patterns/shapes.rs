//! Shape detectors: named predicates keyed in a registry.
//!
//! Adding a PHI shape means adding a pattern here and a catalog feature; the
//! scorer and redactor are unaffected.

use phi_core::models::Feature;
use regex::Regex;
use std::sync::LazyLock;

/// Which text a shape pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeScope {
    /// The token itself.
    Word,
    /// Before-context immediately followed by the token.
    BeforeAndWord,
    /// Before-context, token, and after-context.
    Window,
}

/// A compiled shape detector.
pub struct ShapePattern {
    pub name: &'static str,
    pub feature: Feature,
    pub scope: ShapeScope,
    pub regex: &'static LazyLock<Option<Regex>>,
}

impl ShapePattern {
    /// Evaluate the predicate for a token in context.
    pub fn matches(&self, word: &str, before: &str, after: &str) -> bool {
        match self.scope {
            ShapeScope::Word => super::is_match(self.regex, word),
            ShapeScope::BeforeAndWord => super::is_match(self.regex, &format!("{before}{word}")),
            ShapeScope::Window => {
                super::is_match(self.regex, &format!("{before}{word}{after}"))
            }
        }
    }
}

phi_pattern!(RE_DATE, r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b");

phi_pattern!(RE_PHONE, r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}");

phi_pattern!(RE_EMAIL, r"@");

phi_pattern!(RE_SSN, r"\d{3}-\d{2}-\d{4}");

// Identifier marker followed by the digits of the token.
phi_pattern!(RE_MRN, r"(?i)\b(?:MRN|ID)[\s:#]*\d+$");

phi_pattern!(
    RE_ADDRESS,
    r"\d+\s+[A-Z][a-z]+\s+(?i:street|st|avenue|ave|road|rd|drive|dr|lane|ln)\b"
);

phi_pattern!(RE_ZIP, r"^\d{5}(?:-\d{4})?$");

/// All shape detectors.
pub fn all_shapes() -> Vec<ShapePattern> {
    vec![
        ShapePattern {
            name: "date",
            feature: Feature::LooksLikeDate,
            scope: ShapeScope::Word,
            regex: &RE_DATE,
        },
        ShapePattern {
            name: "phone",
            feature: Feature::LooksLikePhone,
            scope: ShapeScope::Word,
            regex: &RE_PHONE,
        },
        ShapePattern {
            name: "email",
            feature: Feature::LooksLikeEmail,
            scope: ShapeScope::Word,
            regex: &RE_EMAIL,
        },
        ShapePattern {
            name: "ssn",
            feature: Feature::LooksLikeSsn,
            scope: ShapeScope::Word,
            regex: &RE_SSN,
        },
        ShapePattern {
            name: "mrn",
            feature: Feature::LooksLikeMrn,
            scope: ShapeScope::BeforeAndWord,
            regex: &RE_MRN,
        },
        ShapePattern {
            name: "address",
            feature: Feature::LooksLikeAddress,
            scope: ShapeScope::Window,
            regex: &RE_ADDRESS,
        },
        ShapePattern {
            name: "zip",
            feature: Feature::LooksLikeZip,
            scope: ShapeScope::Word,
            regex: &RE_ZIP,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(name: &str) -> ShapePattern {
        all_shapes()
            .into_iter()
            .find(|s| s.name == name)
            .unwrap()
    }

    #[test]
    fn registry_covers_each_shape_feature_once() {
        let shapes = all_shapes();
        assert_eq!(shapes.len(), 7);
        let mut features: Vec<_> = shapes.iter().map(|s| s.feature).collect();
        features.dedup();
        assert_eq!(features.len(), 7);
    }

    #[test]
    fn date_and_phone_shapes() {
        assert!(shape("date").matches("03/15/2024", "", ""));
        assert!(shape("date").matches("3-5-24", "", ""));
        assert!(!shape("date").matches("2024", "", ""));
        assert!(!shape("date").matches("123-45-6789", "", ""));
        assert!(shape("phone").matches("(555) 123-4567", "", ""));
        assert!(shape("phone").matches("5551234567", "", ""));
    }

    #[test]
    fn mrn_needs_marker_before_digits() {
        assert!(shape("mrn").matches("123456", "MRN: ", ""));
        assert!(shape("mrn").matches("98765", "Patient ID #", ""));
        assert!(!shape("mrn").matches("Tel", "MRN 123456. ", ""));
        assert!(!shape("mrn").matches("123456", "Room ", ""));
    }

    #[test]
    fn address_uses_the_window() {
        assert!(shape("address").matches("Main", "lives at 123 ", " Street today"));
        assert!(shape("address").matches("123", "at ", " Oak Ave."));
        assert!(!shape("address").matches("2024", "on ", " for stability"));
    }

    #[test]
    fn zip_is_anchored() {
        assert!(shape("zip").matches("02139", "", ""));
        assert!(shape("zip").matches("02139-4307", "", ""));
        assert!(!shape("zip").matches("021390", "", ""));
    }

    #[test]
    fn ssn_shape() {
        assert!(shape("ssn").matches("123-45-6789", "", ""));
        assert!(!shape("ssn").matches("123-456-789", "", ""));
    }
}
