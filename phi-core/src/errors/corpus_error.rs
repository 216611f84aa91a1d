/// Corpus retrieval errors. These never abort pretraining; the caller falls
/// back to synthetic notes.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("network error fetching {source_id}: {reason}")]
    NetworkError { source_id: String, reason: String },

    #[error("HTTP {status} from {source_id}")]
    HttpStatus { source_id: String, status: u16 },

    #[error("malformed payload from {source_id}: {reason}")]
    MalformedPayload { source_id: String, reason: String },

    #[error("unknown corpus source: {source_id}")]
    UnknownSource { source_id: String },
}
