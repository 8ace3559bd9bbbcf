//! Error types for pagination runs.

use thiserror::Error;

/// Result type alias for pager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Conditions that abort a pagination run or a page lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The renderer could not report the size of a box.
    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(&'static str),

    /// Normalization produced a different token count than the original text.
    #[error("Token mismatch: {original} original tokens vs {normalized} normalized")]
    TokenMismatch { original: usize, normalized: usize },

    /// Page index is out of range.
    #[error("Page {index} is out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// A page range does not lie within the document.
    #[error("Page range {start}..{end} is outside the document ({len} bytes)")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// A page was requested before any text was submitted.
    #[error("No document has been submitted")]
    NoDocument,

    /// Options could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidOptions(err.to_string())
    }
}
