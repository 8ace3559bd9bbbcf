//! Rendering style and the unit metrics derived from it

use serde::{Deserialize, Serialize};

/// Default font size in logical pixels
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Style applied to the page container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    /// Font size in logical pixels
    pub font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Style {
    pub fn with_font_size(font_size: f32) -> Self {
        Self { font_size }
    }
}

/// Box of one monospace rendering unit at a given font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMetrics {
    /// Advance width of one cell
    pub width: f32,
    /// Line height
    pub height: f32,
}

impl Default for UnitMetrics {
    fn default() -> Self {
        Self::for_font_size(DEFAULT_FONT_SIZE)
    }
}

impl UnitMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half an em wide, a quarter em of leading
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            width: font_size * 0.5,
            height: font_size * 1.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_metrics_scale_with_font_size() {
        assert_eq!(UnitMetrics::for_font_size(16.0), UnitMetrics::new(8.0, 20.0));
        assert_eq!(UnitMetrics::for_font_size(32.0), UnitMetrics::new(16.0, 40.0));
    }

    #[test]
    fn test_style_from_partial_json() {
        let style: Style = serde_json::from_str("{}").unwrap();
        assert_eq!(style, Style::default());

        let style: Style = serde_json::from_str(r#"{"fontSize": 24}"#).unwrap();
        assert_eq!(style.font_size, 24.0);
    }
}
