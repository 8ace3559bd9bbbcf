//! Mini-Pager: splits free-form text into container-sized pages
//!
//! This crate provides the pagination core with:
//! - Greedy word-boundary page cuts measured against a pluggable renderer
//! - Exact byte ranges that concatenate back to the original text
//! - A session object for submit / restyle / page selection
//! - A headless grid renderer and WASM bindings for DOM hosts

pub mod error;
pub mod layout;
pub mod render;
pub mod session;
pub mod text;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPager;

// Re-export primary types
pub use error::{Error, Result};
pub use layout::{
    page_index_for_offset, paginate, CapacityMeasurer, Page, Paginator, PaginatorOptions, Style,
};
pub use render::{render_content_for, BoxSize, GridRenderer, Renderer};
pub use session::PaginationSession;
pub use text::{tokenize, Token, TokenKind};
