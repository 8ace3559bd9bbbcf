//! Empirical capacity measurement against a renderer
//!
//! Text shaping and wrapping depend on the host, so the renderer is the only
//! oracle for "does this fit". Measurement runs in two phases: a coarse
//! character-grid upper bound, then trimming the projection one unit at a
//! time until it no longer overflows the container.

use crate::error::{Error, Result};
use crate::render::{BoxSize, Renderer};
use crate::text::Token;

/// Fits tokens into the renderer's container under its current style.
///
/// Holds the renderer exclusively, so no other measurement can interleave
/// with a run.
pub struct CapacityMeasurer<'r, R: Renderer + ?Sized> {
    renderer: &'r mut R,
    /// Capacity is fixed while the style is, so it is queried once
    capacity: Option<usize>,
}

impl<'r, R: Renderer + ?Sized> CapacityMeasurer<'r, R> {
    pub fn new(renderer: &'r mut R) -> Self {
        Self {
            renderer,
            capacity: None,
        }
    }

    /// Upper bound on the number of units one page can hold.
    ///
    /// `ceil(container / unit)` along both axes. Never less than one.
    pub fn capacity_units(&mut self) -> Result<usize> {
        if let Some(capacity) = self.capacity {
            return Ok(capacity);
        }

        let unit = self
            .renderer
            .reference_unit_box()
            .filter(BoxSize::has_area)
            .ok_or(Error::MeasurementUnavailable("reference unit box"))?;
        let container = self.container()?;

        let per_line = (container.width / unit.width).ceil() as usize;
        let per_column = (container.height / unit.height).ceil() as usize;
        let capacity = per_line.saturating_mul(per_column).max(1);

        log::debug!(
            "capacity: {} x {} units (unit {}x{}, container {}x{})",
            per_line,
            per_column,
            unit.width,
            unit.height,
            container.width,
            container.height
        );

        self.capacity = Some(capacity);
        Ok(capacity)
    }

    /// Number of leading tokens that render inside the container.
    ///
    /// The projection is cleared before returning, on error too.
    pub fn fit_count(&mut self, tokens: &[Token<'_>]) -> Result<usize> {
        if tokens.is_empty() {
            return Ok(0);
        }

        let result = self.project_and_trim(tokens);
        let cleared = self.renderer.clear_projection();
        match result {
            Ok(_) if !cleared => Err(Error::MeasurementUnavailable("cleared projection")),
            result => result,
        }
    }

    fn project_and_trim(&mut self, tokens: &[Token<'_>]) -> Result<usize> {
        let capacity = self.capacity_units()?;
        let container = self.container()?;

        // Capacity exceeding the token count projects everything
        let projected = &tokens[..capacity.min(tokens.len())];
        if !self.renderer.project_tokens(projected) {
            return Err(Error::MeasurementUnavailable("projection"));
        }

        let mut count = projected.len();
        while count > 0 {
            let footprint = self
                .renderer
                .projected_box()
                .ok_or(Error::MeasurementUnavailable("projected box"))?;
            if footprint.height <= container.height {
                break;
            }
            if !self.renderer.remove_last_projected() {
                return Err(Error::MeasurementUnavailable("projected unit"));
            }
            count -= 1;
            log::trace!("projection overflows at {} units, trimmed", count + 1);
        }

        Ok(count)
    }

    fn container(&mut self) -> Result<BoxSize> {
        self.renderer
            .container_box()
            .filter(BoxSize::is_measurable)
            .ok_or(Error::MeasurementUnavailable("container box"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Style;
    use crate::text::tokenize;

    /// Renders one word per line, spaces take no room
    #[derive(Default)]
    struct LineRenderer {
        rows: usize,
        projected: Vec<bool>,
        clears: usize,
        unit_missing: bool,
        projection_fails: bool,
        clear_fails: bool,
    }

    impl Renderer for LineRenderer {
        fn reference_unit_box(&mut self) -> Option<BoxSize> {
            (!self.unit_missing).then(|| BoxSize::new(1.0, 1.0))
        }

        fn container_box(&mut self) -> Option<BoxSize> {
            Some(BoxSize::new(10.0, self.rows as f32))
        }

        fn project_tokens(&mut self, tokens: &[Token<'_>]) -> bool {
            if self.projection_fails {
                return false;
            }
            self.projected.extend(tokens.iter().map(|t| t.is_word()));
            true
        }

        fn remove_last_projected(&mut self) -> bool {
            self.projected.pop().is_some()
        }

        fn projected_box(&mut self) -> Option<BoxSize> {
            let words = self.projected.iter().filter(|w| **w).count();
            Some(BoxSize::new(10.0, words as f32))
        }

        fn clear_projection(&mut self) -> bool {
            self.clears += 1;
            if self.clear_fails {
                return false;
            }
            self.projected.clear();
            true
        }

        fn apply_style(&mut self, _style: &Style) {}

        fn render_page(&mut self, _tokens: &[Token<'_>]) {}
    }

    #[test]
    fn test_capacity_units() {
        let mut renderer = LineRenderer {
            rows: 3,
            ..Default::default()
        };
        let mut measurer = CapacityMeasurer::new(&mut renderer);
        assert_eq!(measurer.capacity_units().unwrap(), 30);
    }

    #[test]
    fn test_fit_count_trims_overflow() {
        let mut renderer = LineRenderer {
            rows: 2,
            ..Default::default()
        };
        let tokens = tokenize("one two three four");

        let fitted = CapacityMeasurer::new(&mut renderer)
            .fit_count(&tokens)
            .unwrap();

        // "one two " fits, the third word overflows
        assert_eq!(fitted, 4);
        assert!(renderer.projected.is_empty());
        assert_eq!(renderer.clears, 1);
    }

    #[test]
    fn test_everything_fits() {
        let mut renderer = LineRenderer {
            rows: 5,
            ..Default::default()
        };
        let tokens = tokenize("a b");
        let fitted = CapacityMeasurer::new(&mut renderer)
            .fit_count(&tokens)
            .unwrap();
        assert_eq!(fitted, 3);
    }

    #[test]
    fn test_empty_tokens_skip_renderer() {
        let mut renderer = LineRenderer::default();
        let fitted = CapacityMeasurer::new(&mut renderer).fit_count(&[]).unwrap();
        assert_eq!(fitted, 0);
        assert_eq!(renderer.clears, 0);
    }

    #[test]
    fn test_missing_unit_box_clears_projection() {
        let mut renderer = LineRenderer {
            rows: 2,
            unit_missing: true,
            ..Default::default()
        };
        let tokens = tokenize("one two");

        let err = CapacityMeasurer::new(&mut renderer)
            .fit_count(&tokens)
            .unwrap_err();

        assert_eq!(err, Error::MeasurementUnavailable("reference unit box"));
        assert_eq!(renderer.clears, 1);
    }

    #[test]
    fn test_failed_projection_aborts() {
        let mut renderer = LineRenderer {
            rows: 2,
            projection_fails: true,
            ..Default::default()
        };
        let tokens = tokenize("one two three four");

        let err = CapacityMeasurer::new(&mut renderer)
            .fit_count(&tokens)
            .unwrap_err();

        assert_eq!(err, Error::MeasurementUnavailable("projection"));
        assert_eq!(renderer.clears, 1);
    }

    #[test]
    fn test_failed_clear_aborts() {
        let mut renderer = LineRenderer {
            rows: 5,
            clear_fails: true,
            ..Default::default()
        };
        let tokens = tokenize("a b");

        let err = CapacityMeasurer::new(&mut renderer)
            .fit_count(&tokens)
            .unwrap_err();

        assert_eq!(err, Error::MeasurementUnavailable("cleared projection"));
        assert_eq!(renderer.projected.len(), 3);
    }
}
