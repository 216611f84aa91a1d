//! Context cues evaluated on the before/after strings.

use regex::Regex;
use std::sync::LazyLock;

// ── Honorific right before the token ───────────────────────────────────────
phi_pattern!(RE_TITLE_BEFORE, r"(?i)\b(?:mr|mrs|ms|dr|miss|prof)\.?\s*$");

// ── `'s` right after the token ─────────────────────────────────────────────
phi_pattern!(RE_POSSESSIVE_AFTER, r"(?i)^['’]s\b");

// ── Bare preposition right before the token ────────────────────────────────
phi_pattern!(RE_PREPOSITION_BEFORE, r"(?i)\b(?:in|at|from|to|on|near)\s*$");

// ── Kinship terms ─────────────────────────────────────────────────────────
phi_pattern!(
    RE_KINSHIP,
    r"(?i)\b(?:mother|father|son|daughter|wife|husband|brother|sister)\b"
);

// ── Generational / professional suffixes ───────────────────────────────────
phi_pattern!(RE_SUFFIX, r"(?i)\b(?:jr|sr|ii|iii|iv|md|phd|rn)\b");

// ── Capitalized-lowercase word shape ───────────────────────────────────────
phi_pattern!(RE_CAPITALIZED_WORD, r"^[A-Z][a-z]+$");

/// Every cue pattern with its name.
pub fn all_cues() -> Vec<(&'static str, &'static LazyLock<Option<Regex>>)> {
    vec![
        ("title_before", &RE_TITLE_BEFORE),
        ("possessive_after", &RE_POSSESSIVE_AFTER),
        ("preposition_before", &RE_PREPOSITION_BEFORE),
        ("kinship", &RE_KINSHIP),
        ("suffix", &RE_SUFFIX),
        ("capitalized_word", &RE_CAPITALIZED_WORD),
    ]
}
