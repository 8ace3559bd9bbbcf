//! Render output: the renderer contract and page content reconstruction

mod grid;

pub use grid::GridRenderer;

use crate::error::{Error, Result};
use crate::layout::{Page, Style};
use crate::text::{collapse_spaces, tokenize, Token, Tokens};
use serde::{Deserialize, Serialize};

/// Rendered size of a box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Finite and non-negative along both axes
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Measurable with a strictly positive area
    pub fn has_area(&self) -> bool {
        self.is_measurable() && self.width > 0.0 && self.height > 0.0
    }
}

/// Host rendering capability the paginator measures against.
///
/// Box queries return `None` when the host cannot lay the box out yet.
/// The projection is an off-screen scratch area: tokens are appended to it
/// one unit per token and removed from the end.
pub trait Renderer {
    /// Box of one reference unit at the current style
    fn reference_unit_box(&mut self) -> Option<BoxSize>;

    /// Visible page area
    fn container_box(&mut self) -> Option<BoxSize>;

    /// Append one projected unit per token; `false` if nothing was projected
    fn project_tokens(&mut self, tokens: &[Token<'_>]) -> bool;

    /// Remove the trailing projected unit; `false` if the projection is empty
    fn remove_last_projected(&mut self) -> bool;

    /// Box of the current projection
    fn projected_box(&mut self) -> Option<BoxSize>;

    /// Empty the projection; `false` if stale units may remain
    fn clear_projection(&mut self) -> bool;

    /// Switch to a new style; measurements after this reflect it
    fn apply_style(&mut self, style: &Style);

    /// Draw a page on screen
    fn render_page(&mut self, tokens: &[Token<'_>]);
}

/// Normalized tokens to draw for page `index`.
///
/// Pure function of the page list and the document: the page text is
/// trimmed and every whitespace run collapses to one space.
pub fn render_content_for<'a>(
    pages: &[Page],
    index: usize,
    document: &'a str,
) -> Result<Tokens<'a>> {
    let page = pages.get(index).ok_or(Error::PageOutOfRange {
        index,
        count: pages.len(),
    })?;
    let text = page.text(document).ok_or(Error::RangeOutOfBounds {
        start: page.start,
        end: page.end,
        len: document.len(),
    })?;

    Ok(collapse_spaces(&tokenize(text.trim())))
}
