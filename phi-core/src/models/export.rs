use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::example::TrainingExample;
use super::model::Model;
use super::stats::Stats;

/// Snapshot of everything the detector has learned, for export to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub model: Model,
    pub database: Vec<TrainingExample>,
    pub stats: Stats,
    pub export_date: DateTime<Utc>,
}

impl ExportBundle {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested file name, stamped with the export time in milliseconds.
    pub fn file_name(&self) -> String {
        format!("phi-training-data-{}.json", self.export_date.timestamp_millis())
    }
}
