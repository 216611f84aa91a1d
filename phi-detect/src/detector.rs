use phi_core::models::{BatchResult, Category, Detection, DetectionResult, Model, NoteResult};
use tracing::debug;

use crate::degradation::DegradationTracker;
use crate::features::extract_features;
use crate::redactor::redact;
use crate::segmenter::segment;
use crate::tokenizer::ContextWindow;

/// Scores every token of a note against one model and redacts the positives.
///
/// Borrowing the model keeps a detect pass tied to exactly one model
/// version; a retrain has to publish a new model before the next pass can
/// see it.
pub struct Detector<'m> {
    model: &'m Model,
}

impl<'m> Detector<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        self.model
    }

    /// Detect with pattern-health tracking. The tracker lists every shape
    /// or cue pattern that failed to compile and therefore never fired.
    pub fn detect_with_tracking(&self, text: &str) -> (DetectionResult, DegradationTracker) {
        let tracker = DegradationTracker::check_patterns();
        (self.detect(text), tracker)
    }

    /// Positive tokens of `text` in document order, plus the redacted copy.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let tokens = segment(text);
        let mut detections = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.has_alphanumeric() {
                continue;
            }
            let window = ContextWindow::around(&tokens, i);
            let features = extract_features(token.text, &window.before, &window.after);
            let score = self.model.score(&features);
            if !phi_core::models::is_phi(score) {
                continue;
            }
            detections.push(Detection {
                category: Category::classify(&features),
                value: token.text.to_string(),
                score,
                features,
                before_context: window.before,
                after_context: window.after,
                index: token.start,
                note_index: None,
                feedback: None,
            });
        }

        let redacted = redact(text, &detections);
        debug!(
            tokens = tokens.len(),
            detections = detections.len(),
            model_version = self.model.version,
            "detect pass complete"
        );
        DetectionResult {
            detections,
            redacted,
        }
    }

    /// Run [`Detector::detect`] over each note independently, tagging
    /// detections with their note index.
    pub fn detect_batch<S: AsRef<str>>(&self, notes: &[S]) -> BatchResult {
        let mut total_phi = 0;
        let results = notes
            .iter()
            .enumerate()
            .map(|(note_index, note)| {
                let note = note.as_ref();
                let DetectionResult {
                    mut detections,
                    redacted,
                } = self.detect(note);
                for d in &mut detections {
                    d.note_index = Some(note_index);
                }
                total_phi += detections.len();
                NoteResult {
                    original_note: note.to_string(),
                    detections,
                    redacted,
                }
            })
            .collect();

        BatchResult { results, total_phi }
    }
}

/// Detect PHI in `text` under `model`.
pub fn detect(text: &str, model: &Model) -> DetectionResult {
    Detector::new(model).detect(text)
}

/// Detect PHI in every note of a batch under `model`.
pub fn detect_batch<S: AsRef<str>>(notes: &[S], model: &Model) -> BatchResult {
    Detector::new(model).detect_batch(notes)
}
