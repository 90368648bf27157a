//! Round-robin grid packing.
//!
//! Lays out a flat item sequence over a fixed number of lanes without any
//! framework virtualization, and tracks the largest measured cross-axis
//! extent of every line so that all cells of a line share one size.
//!
//! | Axis | Lanes | Lines | Line extent |
//! |------|-------|-------|-------------|
//! | Vertical | columns | rows | height |
//! | Horizontal | rows | columns | width |
//!
//! # Quick start
//!
//! ```
//! use monthgrid_grid::{Axis, LineExtents, Size, Slot, pack};
//!
//! let items = [1, 2];
//! let grid = pack(&items, 3, Axis::Vertical).unwrap();
//! assert_eq!(grid.line_count(), 1);
//! assert_eq!(grid.slot(0, 2), Some(Slot::Placeholder));
//!
//! let mut extents = LineExtents::for_grid(&grid);
//! grid.measure(&mut extents, |_, item| Size::new(10.0, f64::from(*item)))
//!     .unwrap();
//! assert_eq!(extents.get(0), Some(2.0));
//! ```
//!
//! # Architecture
//!
//! ```text
//! pack()                     (pack.rs)
//!   ├─ validate lane count
//!   └─ PackedGrid
//!        ├─ slot() / line() / lane_slots()
//!        └─ measure() ──> LineExtents::record()   (extents.rs)
//! ```

pub mod axis;
pub mod error;
pub mod extents;
pub mod pack;

pub use axis::{Axis, Size};
pub use error::GridError;
pub use extents::LineExtents;
pub use pack::{PackedGrid, Placement, Slot, pack};
