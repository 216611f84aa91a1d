//! Segmentation: tokenization with compound PHI shapes kept whole.
//!
//! A numeric date such as `03/15/2024` is five word-boundary tokens. The
//! segmenter locates compound shapes first, emits each as a single
//! [`TokenKind::Compound`] token, and tokenizes the gaps normally, so the
//! detector can score and redact the whole value. Output stays lossless.

use crate::patterns::compound::scan_compound;
use crate::tokenizer::{tokenize_into, Token, TokenKind};

/// Tokenize `text`, coalescing compound PHI spans into single tokens.
pub fn segment(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for span in scan_compound(text) {
        if span.start < cursor {
            continue;
        }
        tokenize_into(&text[cursor..span.start], cursor, &mut tokens);
        tokens.push(Token {
            text: &text[span.start..span.end],
            start: span.start,
            kind: TokenKind::Compound,
        });
        cursor = span.end;
    }
    tokenize_into(&text[cursor..], cursor, &mut tokens);
    tokens
}
