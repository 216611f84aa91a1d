use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use phi_core::constants::{KEY_MODEL, KEY_PRETRAINED, KEY_STATS, KEY_TRAINING_DB};
use phi_core::errors::PhiResult;
use phi_core::models::{
    BatchResult, Detection, DetectionResult, ExampleSource, ExportBundle, FeedbackOutcome, Label,
    Model, Stats, TrainingExample,
};
use phi_core::traits::{ICorpusSource, IKeyValueStore};
use phi_core::PhiConfig;
use phi_detect::Detector;
use phi_learning::{
    retrain, PretrainOutcome, PretrainPipeline, PretrainProgress, RemoteCorpus, TrainingStore,
};
use phi_observability::{batch_span, detect_span, feedback_span, pretrain_span, retrain_span};
use phi_storage::{MemoryKvStore, SqliteKvStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::confirmation::Confirmation;
use crate::persistence::Persistence;

/// The detector's working state plus its collaborators.
pub struct PhiSession {
    config: PhiConfig,
    persistence: Persistence,
    corpus: Box<dyn ICorpusSource>,
    model: Model,
    store: TrainingStore,
    stats: Stats,
    pretrained: bool,
    rng: StdRng,
}

impl PhiSession {
    /// Open a session over explicit collaborators.
    ///
    /// Loads the persisted model, store and pretrained flag. A missing or
    /// unparseable model is replaced by a fresh one (and the fresh one is
    /// persisted); a missing or unparseable store starts empty. Stats are
    /// recomputed from the store.
    pub fn open(
        config: PhiConfig,
        kv: Arc<dyn IKeyValueStore>,
        corpus: Box<dyn ICorpusSource>,
    ) -> Self {
        let persistence = Persistence::new(kv);

        let model = match persistence.load::<Model>(KEY_MODEL) {
            Some(model) => model,
            None => {
                let model = Model::with_learning_rate(config.training.learning_rate);
                persistence.save(KEY_MODEL, &model);
                model
            }
        };
        let store = persistence
            .load::<TrainingStore>(KEY_TRAINING_DB)
            .unwrap_or_default();
        let pretrained = persistence.load::<bool>(KEY_PRETRAINED).unwrap_or(false);
        let stats = store.stats();
        let rng = match config.training.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            model_version = model.version,
            examples = store.len(),
            pretrained,
            "session opened"
        );
        Self {
            config,
            persistence,
            corpus,
            model,
            store,
            stats,
            pretrained,
            rng,
        }
    }

    /// Open a session wired from configuration: SQLite at
    /// `storage.db_path` (or an in-memory map), and a remote corpus over
    /// `pretraining.sources`.
    pub fn from_config(config: PhiConfig) -> PhiResult<Self> {
        let kv: Arc<dyn IKeyValueStore> = if config.storage.in_memory {
            Arc::new(MemoryKvStore::new())
        } else {
            Arc::new(SqliteKvStore::open(Path::new(&config.storage.db_path))?)
        };
        let corpus = RemoteCorpus::new(
            config.pretraining.sources.clone(),
            Duration::from_secs(config.pretraining.fetch_timeout_secs),
        );
        Ok(Self::open(config, kv, Box::new(corpus)))
    }

    /// Pretrain once if the session has never been pretrained and
    /// auto-pretraining is on. Returns the outcome when a run happened.
    pub fn initialize<P>(&mut self, progress: P) -> Option<PretrainOutcome>
    where
        P: FnMut(PretrainProgress),
    {
        if self.pretrained || !self.config.pretraining.auto_pretrain {
            return None;
        }
        Some(self.run_pretraining(progress))
    }

    pub fn config(&self) -> &PhiConfig {
        &self.config
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn store(&self) -> &TrainingStore {
        &self.store
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn is_pretrained(&self) -> bool {
        self.pretrained
    }

    /// Detect and redact PHI in one note under the current model.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let span = detect_span!(text.len(), self.model.version);
        let _guard = span.enter();
        Detector::new(&self.model).detect(text)
    }

    /// Detect across a batch of notes.
    pub fn detect_batch<S: AsRef<str>>(&self, notes: &[S]) -> BatchResult {
        let span = batch_span!(notes.len());
        let _guard = span.enter();
        Detector::new(&self.model).detect_batch(notes)
    }

    /// Record a human judgment on `detection` and retrain.
    ///
    /// Appends one feedback example (PHI when `is_correct`), marks the
    /// detection with its outcome, recomputes and persists stats, then runs a
    /// supervised retrain over the whole store before returning.
    pub fn provide_feedback(&mut self, detection: &mut Detection, is_correct: bool) -> Stats {
        let span = feedback_span!(detection.category, is_correct);
        let _guard = span.enter();

        let example = TrainingExample::new(
            detection.value.clone(),
            &detection.before_context,
            &detection.after_context,
            detection.features,
            Label::from_is_phi(is_correct),
            1.0,
            ExampleSource::Feedback,
        );
        self.store.push(example);
        self.persistence.save(KEY_TRAINING_DB, &self.store);

        detection.feedback = Some(if is_correct {
            FeedbackOutcome::Correct
        } else {
            FeedbackOutcome::Incorrect
        });

        self.stats = self.store.stats();
        self.persistence.save(KEY_STATS, &self.stats);

        self.retrain();
        self.stats
    }

    /// Supervised retrain over the whole store. A no-op on an empty store.
    /// Returns the model now in use.
    pub fn retrain(&mut self) -> &Model {
        let span = retrain_span!(self.store.len());
        let _guard = span.enter();

        if self.store.is_empty() {
            return &self.model;
        }
        self.model = retrain(
            &self.model,
            self.store.examples(),
            self.config.training.supervised_epochs,
            &mut self.rng,
        );
        self.persistence.save(KEY_MODEL, &self.model);
        &self.model
    }

    /// Manually run the pretraining pipeline. Adds examples to the store.
    pub fn pretrain<P>(
        &mut self,
        confirmation: Confirmation,
        progress: P,
    ) -> PhiResult<PretrainOutcome>
    where
        P: FnMut(PretrainProgress),
    {
        confirmation.require("pretrain")?;
        Ok(self.run_pretraining(progress))
    }

    fn run_pretraining<P>(&mut self, progress: P) -> PretrainOutcome
    where
        P: FnMut(PretrainProgress),
    {
        let span = pretrain_span!(self.corpus.source_ids().len());
        let _guard = span.enter();

        let pipeline = PretrainPipeline::new(
            &*self.corpus,
            &self.config.pretraining,
            &self.config.training,
        );
        let outcome = pipeline.run(&self.model, &mut self.store, &mut self.rng, progress);

        self.model = outcome.model.clone();
        self.stats = self.store.stats();
        self.pretrained = true;

        self.persistence.save(KEY_TRAINING_DB, &self.store);
        self.persistence.save(KEY_MODEL, &self.model);
        self.persistence.save(KEY_STATS, &self.stats);
        self.persistence.save(KEY_PRETRAINED, &true);
        outcome
    }

    /// Snapshot of model, store and stats.
    pub fn export(&self) -> ExportBundle {
        ExportBundle {
            model: self.model.clone(),
            database: self.store.examples().to_vec(),
            stats: self.stats,
            export_date: Utc::now(),
        }
    }

    /// Delete all persisted state and return to a fresh model with an empty
    /// store. Irreversible.
    pub fn reset(&mut self, confirmation: Confirmation) -> PhiResult<()> {
        confirmation.require("reset")?;
        self.persistence.clear();
        self.model = Model::with_learning_rate(self.config.training.learning_rate);
        self.store.clear();
        self.stats = Stats::default();
        self.pretrained = false;
        warn!("session reset: model, training store and stats cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_learning::OfflineCorpus;

    fn session() -> PhiSession {
        let mut config = PhiConfig::default();
        config.training.seed = Some(7);
        config.pretraining.synthetic_note_count = 10;
        PhiSession::open(
            config,
            Arc::new(MemoryKvStore::new()),
            Box::new(OfflineCorpus),
        )
    }

    #[test]
    fn fresh_session_persists_its_model() {
        let s = session();
        assert_eq!(s.model().version, 1);
        assert!(s.persistence.load::<Model>(KEY_MODEL).is_some());
        assert!(!s.is_pretrained());
    }

    #[test]
    fn retrain_on_empty_store_is_a_no_op() {
        let mut s = session();
        assert_eq!(s.retrain().version, 1);
    }

    #[test]
    fn declined_reset_keeps_state() {
        let mut s = session();
        let mut d = s.detect("Patient Mr. Johnson arrived.").detections.remove(0);
        s.provide_feedback(&mut d, true);
        assert!(s.reset(Confirmation::Declined).is_err());
        assert_eq!(s.store().len(), 1);
    }
}
