//! Multi-token PHI spans that the segmenter coalesces into one token.

use regex::Regex;
use std::sync::LazyLock;

/// A compound-span pattern.
pub struct CompoundPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

/// A located compound span, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundSpan {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl CompoundSpan {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// ── Numeric dates ──────────────────────────────────────────────────────────
phi_pattern!(RE_NUMERIC_DATE, r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b");

// ── US phone numbers, parenthesized area code or bare ──────────────────────
phi_pattern!(
    RE_US_PHONE,
    r"(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b"
);

// ── SSN ────────────────────────────────────────────────────────────────────
phi_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Email ──────────────────────────────────────────────────────────────────
phi_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── ZIP+4 ──────────────────────────────────────────────────────────────────
phi_pattern!(RE_ZIP_PLUS_FOUR, r"\b\d{5}-\d{4}\b");

/// All compound patterns.
pub fn all_compound_patterns() -> Vec<CompoundPattern> {
    vec![
        CompoundPattern {
            name: "email",
            regex: &RE_EMAIL,
        },
        CompoundPattern {
            name: "ssn",
            regex: &RE_SSN,
        },
        CompoundPattern {
            name: "phone",
            regex: &RE_US_PHONE,
        },
        CompoundPattern {
            name: "date",
            regex: &RE_NUMERIC_DATE,
        },
        CompoundPattern {
            name: "zip_plus_four",
            regex: &RE_ZIP_PLUS_FOUR,
        },
    ]
}

/// Find every compound span in `text`, ascending by start and with overlaps
/// removed (the longer span wins, then the earlier one).
pub fn scan_compound(text: &str) -> Vec<CompoundSpan> {
    let mut spans = Vec::new();
    for pat in all_compound_patterns() {
        let Some(re) = pat.regex.as_ref() else { continue };
        for m in re.find_iter(text) {
            spans.push(CompoundSpan {
                name: pat.name,
                start: m.start(),
                end: m.end(),
            });
        }
    }

    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));
    dedup_overlapping(&mut spans);
    spans
}

/// Remove overlapping spans from a list sorted ascending by start, keeping
/// the longer one.
fn dedup_overlapping(spans: &mut Vec<CompoundSpan>) {
    let mut i = 0;
    while i + 1 < spans.len() {
        let current = spans[i];
        let next = spans[i + 1];
        if next.start < current.end {
            if next.len() > current.len() {
                spans.remove(i);
            } else {
                spans.remove(i + 1);
            }
        } else {
            i += 1;
        }
    }
}
