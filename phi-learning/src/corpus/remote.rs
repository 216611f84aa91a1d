//! HTTP rows-endpoint corpus.
//!
//! Each source id is a URL answering `{"rows": [{"row": {...}}, ...]}`. A row
//! becomes one document: its `text`, `content` or `note` field, or the row's
//! JSON when none of those is a string. The HTTP client is only compiled
//! with the `remote` feature; without it every fetch fails and pretraining
//! falls back to synthetic notes.

use std::time::Duration;

use phi_core::errors::{CorpusError, PhiResult};
use phi_core::traits::ICorpusSource;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RowsPayload {
    #[serde(default)]
    rows: Vec<RowEnvelope>,
}

#[derive(Debug, Deserialize)]
struct RowEnvelope {
    row: Value,
}

/// Remote corpus over a fixed list of rows-endpoint URLs.
#[derive(Debug, Clone)]
pub struct RemoteCorpus {
    urls: Vec<String>,
    timeout: Duration,
}

impl RemoteCorpus {
    pub fn new(urls: Vec<String>, timeout: Duration) -> Self {
        Self { urls, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg(feature = "remote")]
    fn get(&self, url: &str) -> PhiResult<String> {
        let network = |reason: String| CorpusError::NetworkError {
            source_id: url.to_string(),
            reason,
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .build()
            .map_err(|e| network(e.to_string()))?;
        let resp = client.get(url).send().map_err(|e| network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CorpusError::HttpStatus {
                source_id: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        resp.text().map_err(|e| network(e.to_string()).into())
    }

    #[cfg(not(feature = "remote"))]
    fn get(&self, url: &str) -> PhiResult<String> {
        Err(CorpusError::NetworkError {
            source_id: url.to_string(),
            reason: "remote feature not enabled".to_string(),
        }
        .into())
    }
}

impl ICorpusSource for RemoteCorpus {
    fn source_ids(&self) -> Vec<String> {
        self.urls.clone()
    }

    fn fetch(&self, source_id: &str) -> PhiResult<Vec<String>> {
        if !self.urls.iter().any(|u| u == source_id) {
            return Err(CorpusError::UnknownSource {
                source_id: source_id.to_string(),
            }
            .into());
        }
        let body = self.get(source_id)?;
        parse_rows(source_id, &body)
    }
}

/// Parse a rows payload into documents.
pub fn parse_rows(source_id: &str, body: &str) -> PhiResult<Vec<String>> {
    let payload: RowsPayload =
        serde_json::from_str(body).map_err(|e| CorpusError::MalformedPayload {
            source_id: source_id.to_string(),
            reason: e.to_string(),
        })?;
    Ok(payload.rows.iter().map(|r| note_text(&r.row)).collect())
}

/// The document text of one row.
pub fn note_text(row: &Value) -> String {
    ["text", "content", "note"]
        .iter()
        .find_map(|key| row.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| row.to_string())
}
