//! Flat page offset table for the JS bridge
//!
//! Pages are byte ranges over UTF-8; JavaScript slices strings in UTF-16
//! code units. The table is `[start_0, end_0, start_1, end_1, ...]` in
//! UTF-16 units, returned to JS as a `Uint32Array`.

use crate::layout::Page;

/// Number of u32 values per page in the table
pub const U32_PER_PAGE: usize = 2;

/// Convert byte ranges to a flat table of UTF-16 offsets.
///
/// Walks the document once; pages must be sorted and lie within it.
pub fn utf16_offsets(pages: &[Page], document: &str) -> Vec<u32> {
    let mut table = Vec::with_capacity(pages.len() * U32_PER_PAGE);
    let mut byte_cursor = 0;
    let mut utf16_cursor = 0;

    let mut advance = |to: usize| -> u32 {
        let to = to.min(document.len());
        if to > byte_cursor {
            utf16_cursor += document
                .get(byte_cursor..to)
                .map_or(0, |text| text.encode_utf16().count());
            byte_cursor = to;
        }
        utf16_cursor as u32
    };

    for page in pages {
        table.push(advance(page.start));
        table.push(advance(page.end));
    }
    table
}
