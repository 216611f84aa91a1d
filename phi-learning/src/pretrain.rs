//! The pretraining pipeline: fetch → label → store → train.

use phi_core::config::{PretrainingConfig, TrainingConfig};
use phi_core::models::{Model, TrainingExample};
use phi_core::traits::ICorpusSource;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::corpus::generate_synthetic_notes;
use crate::store::TrainingStore;
use crate::trainer::reward::{self, PretrainReport, RewardSchedule};
use crate::weak_labeler::{label_document, WeakLabel};

const FETCH_START: f64 = 5.0;
const FETCH_SPAN: f64 = 10.0;
const LABEL_START: f64 = 20.0;
const LABEL_SPAN: f64 = 30.0;
const STORED: f64 = 60.0;
const TRAIN_SPAN: f64 = 35.0;
const LABEL_REPORT_EVERY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PretrainStage {
    Fetching,
    Labeling,
    Storing,
    Training,
    Complete,
}

/// A progress report. `percent` never decreases within one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PretrainProgress {
    pub percent: f64,
    pub stage: PretrainStage,
}

/// Everything a pretraining run produced.
#[derive(Debug, Clone)]
pub struct PretrainOutcome {
    pub model: Model,
    pub report: PretrainReport,
    /// Notes fed to the labeler after capping.
    pub notes: usize,
    /// Whether the corpus yielded nothing and synthetic notes were used.
    pub used_synthetic: bool,
    pub examples_added: usize,
}

pub struct PretrainPipeline<'a> {
    corpus: &'a dyn ICorpusSource,
    pretraining: &'a PretrainingConfig,
    schedule: RewardSchedule,
}

impl<'a> PretrainPipeline<'a> {
    pub fn new(
        corpus: &'a dyn ICorpusSource,
        pretraining: &'a PretrainingConfig,
        training: &TrainingConfig,
    ) -> Self {
        Self {
            corpus,
            pretraining,
            schedule: RewardSchedule::from(training),
        }
    }

    /// Run the full pipeline. New examples are appended to `store`; training
    /// runs over those new examples only.
    pub fn run<R, P>(
        &self,
        model: &Model,
        store: &mut TrainingStore,
        rng: &mut R,
        mut progress: P,
    ) -> PretrainOutcome
    where
        R: Rng + ?Sized,
        P: FnMut(PretrainProgress),
    {
        let mut report = |percent: f64, stage: PretrainStage| {
            progress(PretrainProgress { percent, stage });
        };

        // Fetch.
        report(FETCH_START, PretrainStage::Fetching);
        let sources = self.corpus.source_ids();
        let mut notes = Vec::new();
        for (i, source_id) in sources.iter().enumerate() {
            match self.corpus.fetch(source_id) {
                Ok(docs) => {
                    info!(source = %source_id, documents = docs.len(), "corpus source fetched");
                    notes.extend(docs);
                }
                Err(e) => warn!(source = %source_id, error = %e, "corpus fetch failed"),
            }
            let done = (i + 1) as f64 / sources.len() as f64;
            report(FETCH_START + done * FETCH_SPAN, PretrainStage::Fetching);
        }

        let used_synthetic = notes.is_empty();
        if used_synthetic {
            info!(
                count = self.pretraining.synthetic_note_count,
                "no corpus documents, using synthetic notes"
            );
            notes = generate_synthetic_notes(self.pretraining.synthetic_note_count, rng);
        }
        notes.truncate(self.pretraining.max_notes);
        report(LABEL_START, PretrainStage::Labeling);

        // Label.
        let mut examples: Vec<TrainingExample> = Vec::new();
        for (i, note) in notes.iter().enumerate() {
            examples.extend(label_document(note).into_iter().map(WeakLabel::into_example));
            let processed = i + 1;
            if processed % LABEL_REPORT_EVERY == 0 {
                let done = processed as f64 / notes.len() as f64;
                report(LABEL_START + done * LABEL_SPAN, PretrainStage::Labeling);
            }
        }
        report(LABEL_START + LABEL_SPAN, PretrainStage::Labeling);

        // Store.
        let examples_added = examples.len();
        store.extend(examples.iter().cloned());
        report(STORED, PretrainStage::Storing);

        // Train.
        let epochs = self.schedule.epochs.max(1) as f64;
        let (model, train_report) =
            reward::pretrain(model, &examples, &self.schedule, rng, |summary| {
                report(
                    STORED + summary.epoch as f64 / epochs * TRAIN_SPAN,
                    PretrainStage::Training,
                );
            });
        report(100.0, PretrainStage::Complete);

        info!(
            notes = notes.len(),
            examples = examples_added,
            used_synthetic,
            version = model.version,
            "pretraining pipeline complete"
        );
        PretrainOutcome {
            model,
            report: train_report,
            notes: notes.len(),
            used_synthetic,
            examples_added,
        }
    }
}
