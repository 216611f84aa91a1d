use crate::errors::PhiResult;

/// A provider of raw clinical documents for pretraining.
///
/// Each source may fail independently; callers tolerate partial or total
/// failure.
pub trait ICorpusSource: Send + Sync {
    /// Identifiers of the sources this provider can fetch.
    fn source_ids(&self) -> Vec<String>;

    /// Fetch all documents from one source.
    fn fetch(&self, source_id: &str) -> PhiResult<Vec<String>>;
}
