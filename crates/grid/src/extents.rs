//! Per-line maximum cross-axis extents.

use tracing::trace;

use crate::axis::{Axis, Size};
use crate::error::GridError;
use crate::pack::PackedGrid;

/// Caller-owned accumulator of the largest extent measured on each line.
///
/// Updates keep the maximum, so recording the same measurements again or in
/// another order leaves the result unchanged. Lines never measured report
/// `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineExtents {
    extents: Vec<f64>,
}

impl LineExtents {
    /// Tracks `line_count` lines, all starting at `0.0`.
    pub fn new(line_count: usize) -> Self {
        Self {
            extents: vec![0.0; line_count],
        }
    }

    /// Tracks the lines of `grid`.
    pub fn for_grid<T>(grid: &PackedGrid<'_, T>) -> Self {
        Self::new(grid.line_count())
    }

    pub fn line_count(&self) -> usize {
        self.extents.len()
    }

    pub fn get(&self, line: usize) -> Option<f64> {
        self.extents.get(line).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.extents
    }

    /// Raises line `line` to `extent` if it is larger than the current value.
    /// Returns whether the stored maximum changed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LineOutOfBounds`] for an untracked line and
    /// [`GridError::InvalidExtent`] for a negative or non-finite extent.
    pub fn update(&mut self, line: usize, extent: f64) -> Result<bool, GridError> {
        if !extent.is_finite() || extent < 0.0 {
            return Err(GridError::InvalidExtent { line, extent });
        }
        let line_count = self.extents.len();
        let current = self
            .extents
            .get_mut(line)
            .ok_or(GridError::LineOutOfBounds { line, line_count })?;
        if extent > *current {
            trace!(line, from = *current, to = extent, "line extent raised");
            *current = extent;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Records the cross-axis extent of `size` on `line`.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    pub fn record(&mut self, axis: Axis, line: usize, size: Size) -> Result<bool, GridError> {
        self.update(line, size.cross_extent(axis))
    }

    /// Sum of all line extents plus `spacing` between consecutive lines.
    pub fn total(&self, spacing: f64) -> f64 {
        let gaps = self.extents.len().saturating_sub(1) as f64;
        self.extents.iter().sum::<f64>() + spacing * gaps
    }
}
