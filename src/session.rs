//! Pagination session: document, style, page list and selection
//!
//! State is replaced wholesale. A run that fails leaves the previous
//! document, pages and selection in place.

use crate::error::{Error, Result};
use crate::layout::{page_index_for_offset, Page, Paginator, PaginatorOptions, Style};
use crate::render::{render_content_for, Renderer};
use crate::text::Tokens;

/// Owns the renderer and the state the page view is drawn from
pub struct PaginationSession<R: Renderer> {
    renderer: R,
    paginator: Paginator,
    style: Style,
    document: Option<String>,
    pages: Vec<Page>,
    current: usize,
}

impl<R: Renderer> PaginationSession<R> {
    /// Create a session and apply `style` to the renderer
    pub fn new(mut renderer: R, style: Style, options: PaginatorOptions) -> Self {
        renderer.apply_style(&style);
        Self {
            renderer,
            paginator: Paginator::new(options),
            style,
            document: None,
            pages: Vec::new(),
            current: 0,
        }
    }

    /// Replace the document, repaginate and show the first page
    pub fn submit(&mut self, text: impl Into<String>) -> Result<&[Page]> {
        let text = text.into();
        let pages = self.paginator.paginate(&text, &mut self.renderer)?;

        log::debug!("submitted {} bytes, {} pages", text.len(), pages.len());
        self.document = Some(text);
        self.pages = pages;
        self.current = 0;
        self.draw_current()?;

        Ok(&self.pages)
    }

    /// Switch style and repaginate, staying on the page that holds the
    /// first character of the page shown before.
    pub fn set_style(&mut self, style: Style) -> Result<&[Page]> {
        let previous = self.style;
        self.renderer.apply_style(&style);

        let Some(document) = self.document.as_deref() else {
            self.style = style;
            return Ok(&self.pages);
        };

        let pages = match self.paginator.paginate(document, &mut self.renderer) {
            Ok(pages) => pages,
            Err(err) => {
                self.renderer.apply_style(&previous);
                return Err(err);
            }
        };

        let anchor = self.pages.get(self.current).map_or(0, |page| page.start);
        self.current = page_index_for_offset(&pages, anchor).unwrap_or(0);
        self.pages = pages;
        self.style = style;
        log::debug!(
            "restyled to {}px, {} pages, showing page {}",
            style.font_size,
            self.pages.len(),
            self.current
        );
        self.draw_current()?;

        Ok(&self.pages)
    }

    /// Show page `index`
    pub fn select_page(&mut self, index: usize) -> Result<()> {
        let document = self.document.as_deref().ok_or(Error::NoDocument)?;
        let tokens = render_content_for(&self.pages, index, document)?;

        self.renderer.render_page(&tokens);
        self.current = index;
        Ok(())
    }

    /// Normalized tokens of the page on screen
    pub fn current_tokens(&self) -> Result<Tokens<'_>> {
        let document = self.document.as_deref().ok_or(Error::NoDocument)?;
        render_content_for(&self.pages, self.current, document)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page on screen
    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// One-based labels for the page buttons
    pub fn page_labels(&self) -> Vec<String> {
        (1..=self.pages.len()).map(|n| n.to_string()).collect()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn draw_current(&mut self) -> Result<()> {
        self.select_page(self.current)
    }
}
