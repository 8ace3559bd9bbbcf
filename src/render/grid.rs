//! Headless monospace renderer
//!
//! Lays tokens out on a character grid the way a browser lays out
//! `white-space: normal` text in a monospace font: greedy word wrap,
//! spaces hang at the end of a line, words wider than a line break anywhere.
//! Widths are counted in grapheme clusters.

use crate::layout::{Style, UnitMetrics};
use crate::render::{BoxSize, Renderer};
use crate::text::Token;
use rustc_hash::FxHashMap;
use std::mem;
use unicode_segmentation::UnicodeSegmentation;

/// A token laid onto the grid
#[derive(Debug, Clone)]
struct GridUnit {
    text: String,
    space: bool,
}

impl GridUnit {
    fn from_token(token: &Token<'_>) -> Self {
        Self {
            text: token.text.to_string(),
            space: token.is_space(),
        }
    }
}

/// Deterministic renderer over a fixed pixel container
#[derive(Debug, Clone)]
pub struct GridRenderer {
    /// Container size in logical pixels
    container: BoxSize,
    style: Style,
    /// Unit metrics per font size, keyed by the size's bit pattern
    metrics: FxHashMap<u32, UnitMetrics>,
    projection: Vec<GridUnit>,
    /// Lines of the last drawn page
    drawn: Vec<String>,
}

impl GridRenderer {
    /// Create a renderer for a container of `width x height` pixels
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            container: BoxSize::new(width, height),
            style: Style::default(),
            metrics: FxHashMap::default(),
            projection: Vec::new(),
            drawn: Vec::new(),
        }
    }

    /// Create a renderer whose container holds exactly `columns x rows`
    /// cells at the default style
    pub fn with_cells(columns: usize, rows: usize) -> Self {
        let unit = UnitMetrics::default();
        Self::new(columns as f32 * unit.width, rows as f32 * unit.height)
    }

    /// Builder-style variant of `apply_style`
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Cells per line at the current style, at least one
    pub fn columns(&mut self) -> usize {
        let unit = self.unit();
        ((self.container.width / unit.width).floor() as usize).max(1)
    }

    /// Lines per page at the current style
    pub fn rows(&mut self) -> usize {
        let unit = self.unit();
        (self.container.height / unit.height).floor() as usize
    }

    /// Lines of the last page drawn, trailing spaces removed
    pub fn drawn_lines(&self) -> &[String] {
        &self.drawn
    }

    fn unit(&mut self) -> UnitMetrics {
        let font_size = self.style.font_size;
        *self
            .metrics
            .entry(font_size.to_bits())
            .or_insert_with(|| UnitMetrics::for_font_size(font_size))
    }
}

impl Renderer for GridRenderer {
    fn reference_unit_box(&mut self) -> Option<BoxSize> {
        let unit = self.unit();
        Some(BoxSize::new(unit.width, unit.height))
    }

    fn container_box(&mut self) -> Option<BoxSize> {
        Some(self.container)
    }

    fn project_tokens(&mut self, tokens: &[Token<'_>]) -> bool {
        self.projection.extend(tokens.iter().map(GridUnit::from_token));
        true
    }

    fn remove_last_projected(&mut self) -> bool {
        self.projection.pop().is_some()
    }

    fn projected_box(&mut self) -> Option<BoxSize> {
        let unit = self.unit();
        let columns = self.columns();
        let lines = wrap(&self.projection, columns).len();
        Some(BoxSize::new(self.container.width, lines as f32 * unit.height))
    }

    fn clear_projection(&mut self) -> bool {
        self.projection.clear();
        true
    }

    fn apply_style(&mut self, style: &Style) {
        self.style = *style;
    }

    fn render_page(&mut self, tokens: &[Token<'_>]) {
        let units: Vec<GridUnit> = tokens.iter().map(GridUnit::from_token).collect();
        let columns = self.columns();
        self.drawn = wrap(&units, columns)
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect();
    }
}

/// Greedy word wrap into lines of at most `columns` cells
fn wrap(units: &[GridUnit], columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut column = 0;
    let mut open = false;

    for unit in units {
        let width = unit.text.graphemes(true).count();

        if unit.space {
            if !open {
                continue;
            }
            if column + width <= columns {
                current.push_str(&unit.text);
                column += width;
            } else {
                // Hanging space: takes no room but ends the line
                column = columns;
            }
            continue;
        }

        if !open {
            open = true;
        } else if column > 0 && column + width > columns {
            lines.push(mem::take(&mut current));
            column = 0;
        }

        for grapheme in unit.text.graphemes(true) {
            if column == columns {
                lines.push(mem::take(&mut current));
                column = 0;
            }
            current.push_str(grapheme);
            column += 1;
        }
    }

    if open {
        lines.push(current);
    }
    lines
}
