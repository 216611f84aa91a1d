//! Compiled regex patterns, grouped by use.
//!
//! Patterns compile lazily into `LazyLock<Option<Regex>>`; one that fails to
//! compile matches nothing and is reported by [`failed_patterns`].

use regex::Regex;
use std::sync::LazyLock;

macro_rules! phi_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod compound;
pub mod cues;
pub mod shapes;

/// Whether `regex` compiled and matches `text`.
pub fn is_match(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}

/// Names of every pattern that failed to compile, tagged with its group.
pub fn failed_patterns() -> Vec<(&'static str, &'static str)> {
    let mut failed = Vec::new();
    for shape in shapes::all_shapes() {
        if shape.regex.is_none() {
            failed.push((shape.name, "shape"));
        }
    }
    for (name, regex) in cues::all_cues() {
        if regex.is_none() {
            failed.push((name, "cue"));
        }
    }
    for pat in compound::all_compound_patterns() {
        if pat.regex.is_none() {
            failed.push((pat.name, "compound"));
        }
    }
    failed
}
