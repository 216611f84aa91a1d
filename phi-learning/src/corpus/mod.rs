//! Sources of raw clinical notes for pretraining.

mod remote;
mod synthetic;

pub use remote::{note_text, parse_rows, RemoteCorpus};
pub use synthetic::generate_synthetic_notes;

use phi_core::errors::{CorpusError, PhiResult};
use phi_core::traits::ICorpusSource;

/// In-process corpus: fixed documents under fixed source ids.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    sources: Vec<(String, Vec<String>)>,
}

impl StaticCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source with its documents.
    pub fn with_source(
        mut self,
        id: impl Into<String>,
        documents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.sources.push((
            id.into(),
            documents.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

impl ICorpusSource for StaticCorpus {
    fn source_ids(&self) -> Vec<String> {
        self.sources.iter().map(|(id, _)| id.clone()).collect()
    }

    fn fetch(&self, source_id: &str) -> PhiResult<Vec<String>> {
        self.sources
            .iter()
            .find(|(id, _)| id == source_id)
            .map(|(_, docs)| docs.clone())
            .ok_or_else(|| {
                CorpusError::UnknownSource {
                    source_id: source_id.to_string(),
                }
                .into()
            })
    }
}

/// No sources at all; pretraining always falls back to synthetic notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCorpus;

impl ICorpusSource for OfflineCorpus {
    fn source_ids(&self) -> Vec<String> {
        Vec::new()
    }

    fn fetch(&self, source_id: &str) -> PhiResult<Vec<String>> {
        Err(CorpusError::UnknownSource {
            source_id: source_id.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_core::PhiError;

    #[test]
    fn static_corpus_serves_its_documents() {
        let corpus = StaticCorpus::new()
            .with_source("a", ["one", "two"])
            .with_source("b", Vec::<String>::new());
        assert_eq!(corpus.source_ids(), vec!["a", "b"]);
        assert_eq!(corpus.fetch("a").unwrap(), vec!["one", "two"]);
        assert!(corpus.fetch("b").unwrap().is_empty());
    }

    #[test]
    fn unknown_source_is_a_corpus_error() {
        let err = StaticCorpus::new().fetch("missing").unwrap_err();
        assert!(matches!(
            err,
            PhiError::Corpus(CorpusError::UnknownSource { .. })
        ));
        assert!(OfflineCorpus.source_ids().is_empty());
        assert!(OfflineCorpus.fetch("x").is_err());
    }
}
