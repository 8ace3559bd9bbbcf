//! Measurement normalization
//!
//! A chunk is measured in its rendered form: leading whitespace set aside,
//! trailing whitespace dropped, every whitespace run (line breaks included)
//! collapsed to a single space. The original text is never rewritten.

use crate::text::token::{collapse_whitespace, tokenize, Token, Tokens, SINGLE_SPACE};

/// A chunk split into its leading whitespace and trimmed body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedChunk<'a> {
    leading: &'a str,
    trimmed: &'a str,
}

impl<'a> NormalizedChunk<'a> {
    pub fn new(chunk: &'a str) -> Self {
        let body = chunk.trim_start();
        let leading = &chunk[..chunk.len() - body.len()];

        Self {
            leading,
            trimmed: body.trim_end(),
        }
    }

    /// Whitespace preceding the first word
    pub fn leading(&self) -> &'a str {
        self.leading
    }

    /// Chunk without leading or trailing whitespace, original spacing intact
    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    /// True when the chunk holds no word at all
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Single-spaced rendering used for measurement
    pub fn text(&self) -> String {
        collapse_whitespace(self.trimmed)
    }

    /// Tokens of the trimmed chunk with their original lengths
    pub fn original_tokens(&self) -> Tokens<'a> {
        tokenize(self.trimmed)
    }
}

/// Replace every space token with a single space, keeping words borrowed.
pub fn collapse_spaces<'a>(tokens: &[Token<'a>]) -> Tokens<'a> {
    tokens
        .iter()
        .map(|token| {
            if token.is_space() {
                Token::space(SINGLE_SPACE)
            } else {
                *token
            }
        })
        .collect()
}
