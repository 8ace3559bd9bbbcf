//! Pagination of free-form text into container-sized pages
//!
//! Each step slices an oversized chunk off the unconsumed text, measures how
//! many normalized tokens of it fit one page, and maps that token count back
//! onto the original text. Whitespace runs in the original keep their exact
//! length, so pages concatenate back to the document byte for byte.

use crate::error::{Error, Result};
use crate::layout::measure::CapacityMeasurer;
use crate::render::Renderer;
use crate::text::{tokenize, NormalizedChunk, Token};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Half-open byte range of the document shown as one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub start: usize,
    pub end: usize,
}

impl Page {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if a document offset falls on this page
    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }

    /// Original text of this page, `None` if the range does not fit `document`
    pub fn text<'a>(&self, document: &'a str) -> Option<&'a str> {
        document.get(self.range())
    }
}

/// Pagination options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginatorOptions {
    /// Fold a whitespace-only tail into the last page instead of emitting
    /// a blank page for it
    pub merge_trailing_whitespace: bool,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            merge_trailing_whitespace: true,
        }
    }
}

/// Splits documents into pages using a renderer as the fit oracle
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    options: PaginatorOptions,
}

impl Paginator {
    pub fn new(options: PaginatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    /// Compute the full page list for `document`.
    ///
    /// An empty document yields a single empty page without measuring.
    /// Any measurement or mapping error aborts the run.
    pub fn paginate<R: Renderer + ?Sized>(
        &self,
        document: &str,
        renderer: &mut R,
    ) -> Result<Vec<Page>> {
        if document.is_empty() {
            return Ok(vec![Page::new(0, 0)]);
        }

        let mut measurer = CapacityMeasurer::new(renderer);
        let capacity = measurer.capacity_units()?;
        let mut pages: Vec<Page> = Vec::new();
        let mut start = 0;

        while start < document.len() {
            let leftover = &document[start..];

            if self.options.merge_trailing_whitespace && leftover.trim_start().is_empty() {
                if let Some(last) = pages.last_mut() {
                    last.end = document.len();
                    break;
                }
            }

            let consumed = measure_page(leftover, capacity, &mut measurer)?;
            debug_assert!(consumed > 0, "page made no progress");

            let page = Page::new(start, start + consumed);
            log::debug!("page {}: {}..{}", pages.len(), page.start, page.end);
            pages.push(page);
            start = page.end;
        }

        log::debug!(
            "paginated {} bytes into {} pages",
            document.len(),
            pages.len()
        );
        Ok(pages)
    }
}

/// Paginate with default options
pub fn paginate<R: Renderer + ?Sized>(document: &str, renderer: &mut R) -> Result<Vec<Page>> {
    Paginator::default().paginate(document, renderer)
}

/// Index of the page holding `offset`.
///
/// The end of the document maps to the last page.
pub fn page_index_for_offset(pages: &[Page], offset: usize) -> Option<usize> {
    let last = pages.last()?;
    if offset >= last.end {
        return (offset == last.end).then_some(pages.len() - 1);
    }
    let index = pages.partition_point(|page| page.end <= offset);
    Some(index)
}

/// Bytes of `leftover` that make up the next page. Always positive for
/// non-empty input.
fn measure_page<R: Renderer + ?Sized>(
    leftover: &str,
    capacity: usize,
    measurer: &mut CapacityMeasurer<'_, R>,
) -> Result<usize> {
    let body = leftover.trim_start();
    let leading = leftover.len() - body.len();
    if body.is_empty() {
        return Ok(leftover.len());
    }

    // Oversized on purpose: capacity counts characters, fitting counts tokens
    let chunk_end = leading + grapheme_prefix_len(body, capacity);
    let chunk = NormalizedChunk::new(&leftover[..chunk_end]);

    let mut original = chunk.original_tokens();
    let normalized_text = chunk.text();
    let mut normalized = tokenize(&normalized_text);
    if original.len() != normalized.len() {
        return Err(Error::TokenMismatch {
            original: original.len(),
            normalized: normalized.len(),
        });
    }

    if cuts_word(leftover, chunk_end) {
        original.pop();
        normalized.pop();
    }

    let words = measurer.fit_count(&normalized)?;
    if words == 0 {
        // A single word wider than the page: take all of it
        let word = body.find(char::is_whitespace).unwrap_or(body.len());
        log::warn!(
            "word of {} bytes exceeds page capacity, emitting oversized page",
            word
        );
        return Ok(leading + word);
    }

    let fitted: usize = original[..words].iter().map(Token::len).sum();
    Ok(leading + fitted)
}

/// Byte length of the first `count` grapheme clusters
fn grapheme_prefix_len(text: &str, count: usize) -> usize {
    text.grapheme_indices(true)
        .nth(count)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// True when `at` splits a word of `text`
fn cuts_word(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back();
    let after = text[at..].chars().next();
    matches!(
        (before, after),
        (Some(b), Some(a)) if !b.is_whitespace() && !a.is_whitespace()
    )
}
