//! The feature catalog, per-token feature vectors, and model weights.
//!
//! Both [`FeatureVector`] and [`FeatureWeights`] are fixed-schema records
//! indexed by [`Feature`]. On the wire they are JSON objects keyed by feature
//! name; unknown keys are dropped and missing keys read as zero.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::WEIGHT_CLAMP;

/// A named numeric signal derived from a token and its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    HasTitleBefore,
    HasPossessive,
    NearPatientWord,
    NearGeographicWord,
    NearInstitutionWord,
    CapitalizedSequence,
    AfterPreposition,
    HasSuffixIndicator,
    InQuotes,
    NearRelationshipWord,
    LooksLikeDate,
    LooksLikePhone,
    LooksLikeEmail,
    LooksLikeSsn,
    LooksLikeMrn,
    LooksLikeAddress,
    LooksLikeZip,
    IsAllCaps,
    HasNumbers,
    LengthOver10,
    CommonWord,
}

impl Feature {
    pub const COUNT: usize = 21;

    /// Every feature, in catalog order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::HasTitleBefore,
        Feature::HasPossessive,
        Feature::NearPatientWord,
        Feature::NearGeographicWord,
        Feature::NearInstitutionWord,
        Feature::CapitalizedSequence,
        Feature::AfterPreposition,
        Feature::HasSuffixIndicator,
        Feature::InQuotes,
        Feature::NearRelationshipWord,
        Feature::LooksLikeDate,
        Feature::LooksLikePhone,
        Feature::LooksLikeEmail,
        Feature::LooksLikeSsn,
        Feature::LooksLikeMrn,
        Feature::LooksLikeAddress,
        Feature::LooksLikeZip,
        Feature::IsAllCaps,
        Feature::HasNumbers,
        Feature::LengthOver10,
        Feature::CommonWord,
    ];

    /// Stable snake_case name used in persisted blobs.
    pub fn name(self) -> &'static str {
        match self {
            Feature::HasTitleBefore => "has_title_before",
            Feature::HasPossessive => "has_possessive",
            Feature::NearPatientWord => "near_patient_word",
            Feature::NearGeographicWord => "near_geographic_word",
            Feature::NearInstitutionWord => "near_institution_word",
            Feature::CapitalizedSequence => "capitalized_sequence",
            Feature::AfterPreposition => "after_preposition",
            Feature::HasSuffixIndicator => "has_suffix_indicator",
            Feature::InQuotes => "in_quotes",
            Feature::NearRelationshipWord => "near_relationship_word",
            Feature::LooksLikeDate => "looks_like_date",
            Feature::LooksLikePhone => "looks_like_phone",
            Feature::LooksLikeEmail => "looks_like_email",
            Feature::LooksLikeSsn => "looks_like_ssn",
            Feature::LooksLikeMrn => "looks_like_mrn",
            Feature::LooksLikeAddress => "looks_like_address",
            Feature::LooksLikeZip => "looks_like_zip",
            Feature::IsAllCaps => "is_all_caps",
            Feature::HasNumbers => "has_numbers",
            Feature::LengthOver10 => "length_over_10",
            Feature::CommonWord => "common_word",
        }
    }

    /// Look a feature up by its persisted name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values for the full feature catalog, as produced by one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    /// All-zero vector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// Set an indicator feature to 1 or 0.
    pub fn set_flag(&mut self, feature: Feature, on: bool) {
        self.set(feature, if on { 1.0 } else { 0.0 });
    }

    /// Whether an indicator feature fired.
    pub fn is_set(&self, feature: Feature) -> bool {
        self.get(feature) != 0.0
    }

    /// Every (feature, value) pair in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Only the features with a nonzero value.
    pub fn nonzero(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.iter().filter(|(_, v)| *v != 0.0)
    }
}

/// Model weights over the feature catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureWeights {
    values: [f64; Feature::COUNT],
}

impl FeatureWeights {
    /// The hand-chosen weights a new model starts from.
    pub fn initial() -> Self {
        let mut w = Self::default();
        for (feature, value) in [
            (Feature::HasTitleBefore, 2.0),
            (Feature::HasPossessive, 1.5),
            (Feature::NearPatientWord, 3.0),
            (Feature::NearGeographicWord, -2.5),
            (Feature::NearInstitutionWord, -2.0),
            (Feature::CapitalizedSequence, 1.8),
            (Feature::AfterPreposition, -1.5),
            (Feature::HasSuffixIndicator, 1.2),
            (Feature::InQuotes, 1.0),
            (Feature::NearRelationshipWord, 2.5),
            (Feature::LooksLikeDate, 5.0),
            (Feature::LooksLikePhone, 5.0),
            (Feature::LooksLikeEmail, 5.0),
            (Feature::LooksLikeSsn, 5.0),
            (Feature::LooksLikeMrn, 4.0),
            (Feature::LooksLikeAddress, 3.5),
            (Feature::LooksLikeZip, 4.0),
            (Feature::IsAllCaps, 0.5),
            (Feature::HasNumbers, 0.8),
            (Feature::LengthOver10, -0.3),
            (Feature::CommonWord, -2.0),
        ] {
            w.set(feature, value);
        }
        w
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Set a weight, clamped to `[-WEIGHT_CLAMP, WEIGHT_CLAMP]`.
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value.clamp(-WEIGHT_CLAMP, WEIGHT_CLAMP);
    }

    /// Add `delta` to a weight and clamp.
    pub fn nudge(&mut self, feature: Feature, delta: f64) {
        self.set(feature, self.get(feature) + delta);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Whether every weight lies inside the clamp range.
    pub fn within_bounds(&self) -> bool {
        self.values
            .iter()
            .all(|w| (-WEIGHT_CLAMP..=WEIGHT_CLAMP).contains(w))
    }
}

fn serialize_catalog<S: Serializer>(
    values: impl Iterator<Item = (Feature, f64)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
    for (feature, value) in values {
        map.serialize_entry(feature.name(), &value)?;
    }
    map.end()
}

fn deserialize_catalog<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<[f64; Feature::COUNT], D::Error> {
    let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
    let mut values = [0.0; Feature::COUNT];
    for (name, value) in raw {
        if let Some(feature) = Feature::from_name(&name) {
            values[feature.index()] = value;
        }
    }
    Ok(values)
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_catalog(self.iter(), serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            values: deserialize_catalog(deserializer)?,
        })
    }
}

impl Serialize for FeatureWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_catalog(self.iter(), serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = deserialize_catalog(deserializer)?;
        let mut weights = Self::default();
        for feature in Feature::ALL {
            weights.set(feature, values[feature.index()]);
        }
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("not_a_feature"), None);
    }

    #[test]
    fn catalog_order_matches_discriminants() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn missing_keys_read_as_zero() {
        let v: FeatureVector = serde_json::from_str(r#"{"looks_like_date": 1}"#).unwrap();
        assert_eq!(v.get(Feature::LooksLikeDate), 1.0);
        assert_eq!(v.get(Feature::HasTitleBefore), 0.0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let v: FeatureVector =
            serde_json::from_str(r#"{"bogus": 3, "has_numbers": 1}"#).unwrap();
        assert_eq!(v.nonzero().count(), 1);
    }

    #[test]
    fn weights_are_clamped_on_set_and_load() {
        let mut w = FeatureWeights::initial();
        w.nudge(Feature::LooksLikeDate, 100.0);
        assert_eq!(w.get(Feature::LooksLikeDate), WEIGHT_CLAMP);

        let loaded: FeatureWeights = serde_json::from_str(r#"{"common_word": -42}"#).unwrap();
        assert_eq!(loaded.get(Feature::CommonWord), -WEIGHT_CLAMP);
        assert!(loaded.within_bounds());
    }

    #[test]
    fn serialized_vector_has_full_catalog() {
        let json = serde_json::to_value(FeatureVector::new()).unwrap();
        assert_eq!(json.as_object().unwrap().len(), Feature::COUNT);
    }
}
