//! Records patterns that could not be used during a detect pass.

use tracing::warn;

/// One pattern that failed to compile and therefore never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern: String,
    pub group: String,
    pub reason: String,
}

/// Collects pattern failures so callers can audit degraded detection.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, pattern: &str, group: &str, reason: &str) {
        warn!(pattern, group, reason, "detection pattern degraded");
        self.failures.push(PatternFailure {
            pattern: pattern.to_string(),
            group: group.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    /// Tracker pre-filled with every pattern that failed to compile.
    pub fn check_patterns() -> Self {
        let mut tracker = Self::new();
        for (name, group) in crate::patterns::failed_patterns() {
            tracker.record_failure(name, group, "regex compilation failed");
        }
        tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_patterns_leave_tracker_clean() {
        let tracker = DegradationTracker::check_patterns();
        assert!(!tracker.is_degraded());
    }

    #[test]
    fn records_failures() {
        let mut tracker = DegradationTracker::new();
        tracker.record_failure("date", "shape", "regex compilation failed");
        assert!(tracker.is_degraded());
        assert_eq!(tracker.failures()[0].pattern, "date");
    }
}
