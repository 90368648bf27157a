//! Tap-driven single-date and date-range selection.

use chrono::NaiveDate;

use crate::context::RangePosition;

/// A single selected date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<NaiveDate>,
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self
    }

    /// Handles a tap on `date`, replacing any previous selection.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }
}

/// Which bounds of a [`RangeSelection`] are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Empty,
    StartOnly,
    EndOnly,
    Both,
}

/// How a day should be drawn under a [`RangeSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Start,
    End,
    InRange,
    None,
}

/// A `[start, end]` selection edited by taps.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use monthgrid_model::{Highlight, RangeSelection, SelectionState};
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
/// let mut selection = RangeSelection::new();
/// selection.tap(d(10));
/// selection.tap(d(14));
/// assert_eq!(selection.state(), SelectionState::Both);
/// assert_eq!(selection.highlight(d(12)), Highlight::InRange);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from preset bounds. Bounds are kept as given.
    pub fn with_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn state(&self) -> SelectionState {
        match (self.start, self.end) {
            (None, None) => SelectionState::Empty,
            (Some(_), None) => SelectionState::StartOnly,
            (None, Some(_)) => SelectionState::EndOnly,
            (Some(_), Some(_)) => SelectionState::Both,
        }
    }

    /// Applies a tap on `date`.
    ///
    /// - only a start: a later date becomes the end, anything else replaces
    ///   the start;
    /// - only an end: an earlier date becomes the start, anything else
    ///   replaces the end;
    /// - both: the end is cleared and `date` starts a new range;
    /// - empty: `date` becomes the start.
    pub fn tap(&mut self, date: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) => {
                if date > start {
                    self.end = Some(date);
                } else {
                    self.start = Some(date);
                }
            }
            (None, Some(end)) => {
                if date < end {
                    self.start = Some(date);
                } else {
                    self.end = Some(date);
                }
            }
            (Some(_), Some(_)) => {
                self.end = None;
                self.start = Some(date);
            }
            (None, None) => self.start = Some(date),
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn position_of(&self, date: NaiveDate) -> RangePosition {
        RangePosition::of(date, self.start, self.end)
    }

    /// Highlight for `date` in the current state.
    ///
    /// With a single bound only that bound is highlighted. With both bounds
    /// the start, the end and the days strictly between them are.
    pub fn highlight(&self, date: NaiveDate) -> Highlight {
        match self.state() {
            SelectionState::Empty => Highlight::None,
            SelectionState::StartOnly if self.start == Some(date) => Highlight::Start,
            SelectionState::EndOnly if self.end == Some(date) => Highlight::End,
            SelectionState::StartOnly | SelectionState::EndOnly => Highlight::None,
            SelectionState::Both => match self.position_of(date) {
                RangePosition::EqualToStart => Highlight::Start,
                RangePosition::EqualToEnd => Highlight::End,
                RangePosition::Inside => Highlight::InRange,
                _ => Highlight::None,
            },
        }
    }
}
