//! WASM bindings for the pager

mod dom;
mod offsets;

pub use dom::DomRenderer;
pub use offsets::{utf16_offsets, U32_PER_PAGE};

use crate::error::Error;
use crate::layout::{PaginatorOptions, Style};
use crate::session::PaginationSession;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// WASM-exposed pagination session
#[wasm_bindgen]
pub struct WasmPager {
    session: PaginationSession<DomRenderer>,
}

#[wasm_bindgen]
impl WasmPager {
    /// Create a pager drawing through the given host renderer object
    #[wasm_bindgen(constructor)]
    pub fn new(renderer: JsValue) -> Self {
        Self::with_parsed_options(renderer, PaginatorOptions::default())
    }

    /// Create a pager with options given as JSON, e.g.
    /// `{"mergeTrailingWhitespace": false}`
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(renderer: JsValue, options: &str) -> Result<WasmPager, JsValue> {
        let options: PaginatorOptions =
            serde_json::from_str(options).map_err(|err| to_js(err.into()))?;
        Ok(Self::with_parsed_options(renderer, options))
    }

    /// Paginate new text and draw the first page; returns the page count
    pub fn submit(&mut self, text: &str) -> Result<usize, JsValue> {
        self.session.submit(text).map(|pages| pages.len()).map_err(to_js)
    }

    /// Change the font size and repaginate; returns the page count
    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, font_size: f32) -> Result<usize, JsValue> {
        self.session
            .set_style(Style::with_font_size(font_size))
            .map(|pages| pages.len())
            .map_err(to_js)
    }

    /// Draw page `index`
    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&mut self, index: usize) -> Result<(), JsValue> {
        self.session.select_page(index).map_err(to_js)
    }

    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.session.page_count()
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.session.current_page()
    }

    /// Page ranges as `[start, end, ...]` in UTF-16 code units
    #[wasm_bindgen(js_name = pageOffsets)]
    pub fn page_offsets(&self) -> Vec<u32> {
        let document = self.session.document().unwrap_or_default();
        utf16_offsets(self.session.pages(), document)
    }

    /// Page ranges as JSON (UTF-8 byte offsets)
    #[wasm_bindgen(js_name = pagesJson)]
    pub fn pages_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.pages()).map_err(|err| to_js(err.into()))
    }
}

impl WasmPager {
    fn with_parsed_options(renderer: JsValue, options: PaginatorOptions) -> Self {
        let renderer = DomRenderer::new(renderer);
        Self {
            session: PaginationSession::new(renderer, Style::default(), options),
        }
    }
}
