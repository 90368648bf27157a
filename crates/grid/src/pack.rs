//! Round-robin distribution of items across lanes.

use tracing::debug;

use crate::axis::{Axis, Size};
use crate::error::GridError;
use crate::extents::LineExtents;

/// Lane and line an item is placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub lane: usize,
    pub line: usize,
}

/// One grid cell: an item or the placeholder filling an incomplete line.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Item { index: usize, item: &'a T },
    Placeholder,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    pub fn item(self) -> Option<&'a T> {
        match self {
            Slot::Item { item, .. } => Some(item),
            Slot::Placeholder => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, Slot::Placeholder)
    }
}

/// Items distributed round robin over `lane_count` lanes.
///
/// Item `i` sits in lane `i % lane_count` on line `i / lane_count`. Every
/// lane has [`line_count`](Self::line_count) slots; the ones past the last
/// item are placeholders.
#[derive(Debug)]
pub struct PackedGrid<'a, T> {
    items: &'a [T],
    lane_count: usize,
    axis: Axis,
}

impl<T> Clone for PackedGrid<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PackedGrid<'_, T> {}

impl<'a, T> PackedGrid<'a, T> {
    /// Placement of item `index` in this grid's lanes. Indices past the last
    /// item map onto the placeholder slots that would follow it.
    pub fn placement(&self, index: usize) -> Placement {
        Placement {
            lane: index % self.lane_count,
            line: index / self.lane_count,
        }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `ceil(len / lane_count)`.
    pub fn line_count(&self) -> usize {
        self.items.len().div_ceil(self.lane_count)
    }

    /// The slot at `line` in `lane`, or `None` outside the grid.
    pub fn slot(&self, line: usize, lane: usize) -> Option<Slot<'a, T>> {
        if lane >= self.lane_count || line >= self.line_count() {
            return None;
        }
        let index = line * self.lane_count + lane;
        Some(match self.items.get(index) {
            Some(item) => Slot::Item { index, item },
            None => Slot::Placeholder,
        })
    }

    /// Items of `lane`, first line first.
    pub fn lane(&self, lane: usize) -> impl Iterator<Item = &'a T> + 'a {
        let start = if lane < self.lane_count {
            lane
        } else {
            self.items.len()
        };
        self.items
            .get(start..)
            .unwrap_or_default()
            .iter()
            .step_by(self.lane_count)
    }

    /// All slots of `lane`, padded with placeholders to the line count.
    pub fn lane_slots(&self, lane: usize) -> impl Iterator<Item = Slot<'a, T>> + '_ {
        (0..self.line_count()).filter_map(move |line| self.slot(line, lane))
    }

    /// All slots of `line`, one per lane.
    pub fn line(&self, line: usize) -> impl Iterator<Item = Slot<'a, T>> + '_ {
        (0..self.lane_count).filter_map(move |lane| self.slot(line, lane))
    }

    /// Every line, in order.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Slot<'a, T>>> + '_ {
        (0..self.line_count()).map(move |line| self.line(line).collect())
    }

    /// Measures every item and records its cross-axis extent on its line.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LineOutOfBounds`] if `extents` tracks fewer lines
    /// than the grid has, or [`GridError::InvalidExtent`] for a negative or
    /// non-finite measurement.
    pub fn measure<F>(&self, extents: &mut LineExtents, mut measure: F) -> Result<(), GridError>
    where
        F: FnMut(usize, &T) -> Size,
    {
        for (index, item) in self.items.iter().enumerate() {
            let line = index / self.lane_count;
            extents.record(self.axis, line, measure(index, item))?;
        }
        Ok(())
    }
}

/// Distributes `items` round robin over `lane_count` lanes.
///
/// # Errors
///
/// Returns [`GridError::InvalidConfiguration`] if `lane_count` is zero.
///
/// # Example
///
/// ```
/// use monthgrid_grid::{Axis, pack};
///
/// let items: Vec<u32> = (1..=10).collect();
/// let grid = pack(&items, 3, Axis::Vertical).unwrap();
/// assert_eq!(grid.line_count(), 4);
/// assert_eq!(grid.lane(0).copied().collect::<Vec<_>>(), [1, 4, 7, 10]);
/// ```
#[tracing::instrument(skip(items), fields(n_items = items.len()))]
pub fn pack<T>(items: &[T], lane_count: usize, axis: Axis) -> Result<PackedGrid<'_, T>, GridError> {
    if lane_count == 0 {
        return Err(GridError::InvalidConfiguration { lane_count });
    }
    let grid = PackedGrid {
        items,
        lane_count,
        axis,
    };
    debug!(line_count = grid.line_count(), "packed");
    Ok(grid)
}
