use phi_core::models::{Stats, TrainingExample};
use serde::{Deserialize, Serialize};

/// Append-only collection of labeled examples.
///
/// Examples are never edited or removed one at a time; the only way to drop
/// them is [`TrainingStore::clear`], used by a confirmed reset. Serializes as
/// a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingStore {
    examples: Vec<TrainingExample>,
}

impl TrainingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_examples(examples: Vec<TrainingExample>) -> Self {
        Self { examples }
    }

    pub fn push(&mut self, example: TrainingExample) {
        self.examples.push(example);
    }

    pub fn extend(&mut self, examples: impl IntoIterator<Item = TrainingExample>) {
        self.examples.extend(examples);
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Counters derived from the current contents.
    pub fn stats(&self) -> Stats {
        Stats::from_examples(&self.examples)
    }

    pub fn clear(&mut self) {
        self.examples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_core::models::{ExampleSource, FeatureVector, Label};

    fn example(word: &str, label: Label) -> TrainingExample {
        TrainingExample::new(
            word,
            "",
            "",
            FeatureVector::new(),
            label,
            1.0,
            ExampleSource::Feedback,
        )
    }

    #[test]
    fn push_and_stats() {
        let mut store = TrainingStore::new();
        assert!(store.is_empty());
        store.push(example("Smith", Label::Phi));
        store.extend([example("Denver", Label::NotPhi)]);
        assert_eq!(store.len(), 2);
        let stats = store.stats();
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 1);
    }

    #[test]
    fn serializes_as_array() {
        let store = TrainingStore::from_examples(vec![example("Smith", Label::Phi)]);
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));
        let back: TrainingStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn clear_empties() {
        let mut store = TrainingStore::from_examples(vec![example("x", Label::Phi)]);
        store.clear();
        assert!(store.is_empty());
    }
}
