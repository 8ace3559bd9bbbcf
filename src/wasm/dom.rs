//! Renderer backed by a JavaScript host object
//!
//! The host object exposes the measurement primitives as methods:
//!
//! ```text
//! referenceUnitBox()        -> {width, height}
//! containerBox()            -> {width, height}
//! projectTokens(string[])
//! removeLastProjected()     -> boolean
//! projectedBox()            -> {width, height}
//! clearProjection()
//! applyStyle(fontSize)
//! renderPage(string[])
//! ```
//!
//! A missing method or a thrown exception reads as "not measurable", and a
//! projection the host failed to update or clear aborts the run.

use crate::layout::Style;
use crate::render::{BoxSize, Renderer};
use crate::text::Token;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// `Renderer` that forwards every call to a JS object
pub struct DomRenderer {
    host: JsValue,
}

impl DomRenderer {
    pub fn new(host: JsValue) -> Self {
        Self { host }
    }

    fn call(&self, method: &str, args: &Array) -> Option<JsValue> {
        let function: Function = Reflect::get(&self.host, &JsValue::from_str(method))
            .ok()?
            .dyn_into()
            .ok()?;
        match function.apply(&self.host, args) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("renderer method {} threw: {:?}", method, err);
                None
            }
        }
    }

    fn call_box(&self, method: &str) -> Option<BoxSize> {
        let value = self.call(method, &Array::new())?;
        let width = Reflect::get(&value, &JsValue::from_str("width")).ok()?.as_f64()?;
        let height = Reflect::get(&value, &JsValue::from_str("height")).ok()?.as_f64()?;
        Some(BoxSize::new(width as f32, height as f32))
    }

    fn call_with_tokens(&self, method: &str, tokens: &[Token<'_>]) -> Option<JsValue> {
        let words: Array = tokens
            .iter()
            .map(|token| JsValue::from_str(token.text))
            .collect();
        self.call(method, &Array::of1(&words))
    }
}

impl Renderer for DomRenderer {
    fn reference_unit_box(&mut self) -> Option<BoxSize> {
        self.call_box("referenceUnitBox")
    }

    fn container_box(&mut self) -> Option<BoxSize> {
        self.call_box("containerBox")
    }

    fn project_tokens(&mut self, tokens: &[Token<'_>]) -> bool {
        self.call_with_tokens("projectTokens", tokens).is_some()
    }

    fn remove_last_projected(&mut self) -> bool {
        self.call("removeLastProjected", &Array::new())
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    fn projected_box(&mut self) -> Option<BoxSize> {
        self.call_box("projectedBox")
    }

    fn clear_projection(&mut self) -> bool {
        self.call("clearProjection", &Array::new()).is_some()
    }

    fn apply_style(&mut self, style: &Style) {
        let size = JsValue::from_f64(f64::from(style.font_size));
        self.call("applyStyle", &Array::of1(&size));
    }

    fn render_page(&mut self, tokens: &[Token<'_>]) {
        if self.call_with_tokens("renderPage", tokens).is_none() {
            log::warn!("page was not drawn");
        }
    }
}
