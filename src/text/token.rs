//! Whitespace-boundary tokenizer
//!
//! Text is split into maximal runs of whitespace and non-whitespace. The
//! separators are kept, so concatenating every token reproduces the input.

use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// The single space every whitespace run collapses to.
pub const SINGLE_SPACE: &str = " ";

/// Token list, inline for short chunks
pub type Tokens<'a> = SmallVec<[Token<'a>; 32]>;

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of non-whitespace characters
    Word,
    /// Maximal run of whitespace characters
    Space,
}

/// A word or whitespace run borrowed from the text it was split from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn word(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Word,
            text,
        }
    }

    pub fn space(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Space,
            text,
        }
    }

    /// Byte length in the source text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}

fn whitespace_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Split text into alternating word and space tokens.
///
/// Empty input yields no tokens.
pub fn tokenize(text: &str) -> Tokens<'_> {
    let mut tokens = Tokens::new();
    let mut last = 0;

    for run in whitespace_runs().find_iter(text) {
        if run.start() > last {
            tokens.push(Token::word(&text[last..run.start()]));
        }
        tokens.push(Token::space(run.as_str()));
        last = run.end();
    }

    if last < text.len() {
        tokens.push(Token::word(&text[last..]));
    }

    tokens
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    whitespace_runs().replace_all(text, SINGLE_SPACE).into_owned()
}
