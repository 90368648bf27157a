//! Layout axis and measured sizes.

use std::fmt;

/// Direction in which consecutive lines of a grid are stacked.
///
/// With [`Axis::Vertical`] lanes are columns and lines are rows, so a line's
/// extent is a height. With [`Axis::Horizontal`] lanes are rows, lines are
/// columns and a line's extent is a width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => f.write_str("vertical"),
            Axis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Measured size of one rendered item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent that sizes a line along `axis`.
    pub fn cross_extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// The extent along a line, perpendicular to [`cross_extent`](Self::cross_extent).
    pub fn main_extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }
}
