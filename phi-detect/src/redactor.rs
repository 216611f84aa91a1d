//! Left-to-right redaction with a running offset.
//!
//! Spans are given in original-document byte offsets, ascending and
//! non-overlapping. Each replacement shifts everything after it by
//! `placeholder.len() - original.len()`, so spans are applied in order and
//! the accumulated shift is added to each subsequent start.

use phi_core::models::Detection;
use tracing::warn;

/// Anything that can be redacted from a document.
pub trait RedactionSpan {
    /// Byte offset of the span in the original document.
    fn start(&self) -> usize;
    /// The original text of the span.
    fn original(&self) -> &str;
    /// Replacement text.
    fn placeholder(&self) -> String;
}

impl RedactionSpan for Detection {
    fn start(&self) -> usize {
        self.index
    }

    fn original(&self) -> &str {
        &self.value
    }

    fn placeholder(&self) -> String {
        self.category.placeholder()
    }
}

/// A plain span-and-replacement pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub original: String,
    pub placeholder: String,
}

impl RedactionSpan for Replacement {
    fn start(&self) -> usize {
        self.start
    }

    fn original(&self) -> &str {
        &self.original
    }

    fn placeholder(&self) -> String {
        self.placeholder.clone()
    }
}

/// Replace every span in `text` with its placeholder.
///
/// A span whose text does not sit at its shifted position (out of order,
/// overlapping, or stale) is skipped and leaves the offset untouched.
pub fn redact<S: RedactionSpan>(text: &str, spans: &[S]) -> String {
    let mut result = text.to_string();
    let mut offset: isize = 0;

    for span in spans {
        let original = span.original();
        let shifted = span.start() as isize + offset;
        if shifted < 0 {
            warn!(start = span.start(), "redaction span precedes document start, skipped");
            continue;
        }
        let start = shifted as usize;
        let end = start + original.len();
        if result.get(start..end) != Some(original) {
            warn!(start = span.start(), "redaction span does not match text, skipped");
            continue;
        }

        let placeholder = span.placeholder();
        result.replace_range(start..end, &placeholder);
        offset += placeholder.len() as isize - original.len() as isize;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep(start: usize, original: &str, placeholder: &str) -> Replacement {
        Replacement {
            start,
            original: original.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    #[test]
    fn later_spans_shift_after_longer_placeholders() {
        let text = "Ann met Bob";
        let out = redact(text, &[rep(0, "Ann", "[NAME]"), rep(8, "Bob", "[NAME]")]);
        assert_eq!(out, "[NAME] met [NAME]");
    }

    #[test]
    fn later_spans_shift_after_shorter_placeholders() {
        let text = "Christopher met Bob";
        let out = redact(text, &[rep(0, "Christopher", "X"), rep(16, "Bob", "Y")]);
        assert_eq!(out, "X met Y");
    }

    #[test]
    fn no_spans_leaves_text_unchanged() {
        assert_eq!(redact::<Replacement>("unchanged", &[]), "unchanged");
    }

    #[test]
    fn mismatched_span_is_skipped() {
        let out = redact("Ann met Bob", &[rep(0, "Zed", "[X]"), rep(8, "Bob", "[Y]")]);
        assert_eq!(out, "Ann met [Y]");
    }

    #[test]
    fn out_of_order_span_is_skipped() {
        let out = redact("Ann met Bob", &[rep(8, "Bob", "[LONGNAME]"), rep(0, "Ann", "[X]")]);
        assert_eq!(out, "Ann met [LONGNAME]");
    }
}
