//! Word-boundary tokenizer and context windows.
//!
//! Splits text into maximal runs of word characters (`[A-Za-z0-9_]`) and
//! runs of everything else. Every byte of the input belongs to exactly one
//! token, so concatenating the tokens reproduces the input.

use phi_core::constants::{CONTEXT_CHARS, CONTEXT_TOKENS};
use phi_core::models::{head_chars, tail_chars};

/// What kind of run a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of word characters.
    Word,
    /// Run of whitespace, punctuation, or other non-word characters.
    Separator,
    /// A multi-run span coalesced by the segmenter (e.g. `03/15/2024`).
    Compound,
}

/// A slice of the source text with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether the token holds at least one ASCII letter or digit.
    pub fn has_alphanumeric(&self) -> bool {
        self.text.chars().any(|c| c.is_ascii_alphanumeric())
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `text` at word-character boundaries.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    tokenize_into(text, 0, &mut tokens);
    tokens
}

/// Tokenize `text`, which starts at byte `base` of some larger document,
/// appending to `out`. Offsets are reported relative to that document.
pub(crate) fn tokenize_into<'a>(text: &'a str, base: usize, out: &mut Vec<Token<'a>>) {
    let mut run_start = 0;
    let mut run_is_word: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let word = is_word_char(c);
        match run_is_word {
            Some(current) if current != word => {
                out.push(make_token(text, base, run_start, idx, current));
                run_start = idx;
                run_is_word = Some(word);
            }
            None => run_is_word = Some(word),
            _ => {}
        }
    }
    if let Some(current) = run_is_word {
        out.push(make_token(text, base, run_start, text.len(), current));
    }
}

fn make_token(text: &str, base: usize, start: usize, end: usize, word: bool) -> Token<'_> {
    Token {
        text: &text[start..end],
        start: base + start,
        kind: if word {
            TokenKind::Word
        } else {
            TokenKind::Separator
        },
    }
}

/// Up to `CONTEXT_TOKENS` tokens on either side of a focal token, rendered
/// as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextWindow {
    pub before: String,
    pub after: String,
}

impl ContextWindow {
    /// Window around `tokens[index]`. An out-of-range index yields an empty
    /// after-context.
    pub fn around(tokens: &[Token<'_>], index: usize) -> Self {
        let index = index.min(tokens.len());
        let lo = index.saturating_sub(CONTEXT_TOKENS);
        let hi = (index + 1 + CONTEXT_TOKENS).min(tokens.len());
        let before = tokens[lo..index].iter().map(|t| t.text).collect();
        let after = if index < tokens.len() {
            tokens[index + 1..hi].iter().map(|t| t.text).collect()
        } else {
            String::new()
        };
        Self { before, after }
    }

    /// The last `CONTEXT_CHARS` characters of the before-context.
    pub fn clipped_before(&self) -> &str {
        tail_chars(&self.before, CONTEXT_CHARS)
    }

    /// The first `CONTEXT_CHARS` characters of the after-context.
    pub fn clipped_after(&self) -> &str {
        head_chars(&self.after, CONTEXT_CHARS)
    }
}
