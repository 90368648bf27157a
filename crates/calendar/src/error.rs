//! Error types for the monthgrid-calendar crate.

use chrono::NaiveDate;

use crate::draw_range::DateUnit;

/// Error type for all fallible operations in the monthgrid-calendar crate.
///
/// Covers calendar configuration mistakes (first weekday, symbol tables),
/// malformed draw ranges, and date arithmetic that leaves the representable
/// date range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a first-weekday index is outside the calendar's week.
    #[error("invalid first weekday: {index} (must be 1..={weekday_count})")]
    InvalidFirstWeekday {
        /// The invalid index that was provided.
        index: u8,
        /// Number of weekdays of the calendar that rejected the index.
        weekday_count: u8,
    },

    /// Returned when a symbol table has the wrong number of entries.
    #[error("invalid {kind} symbol count: expected {expected}, got {actual}")]
    InvalidSymbolCount {
        /// Which symbol table was rejected ("month" or "weekday").
        kind: &'static str,
        /// Number of entries the calendar requires.
        expected: usize,
        /// Number of entries that were provided.
        actual: usize,
    },

    /// Returned when adding an amount of some unit to a date has no result.
    #[error("calendar arithmetic overflow: cannot add {amount} {unit} to {date}")]
    ArithmeticOverflow {
        /// The date the arithmetic started from.
        date: NaiveDate,
        /// The signed amount that was added.
        amount: i64,
        /// The unit of `amount`.
        unit: DateUnit,
    },

    /// Returned when a draw range spans zero units.
    #[error("draw range must span at least one {unit}")]
    EmptyDrawRange {
        /// The unit of the empty range.
        unit: DateUnit,
    },

    /// Returned when a draw range string cannot be parsed.
    #[error("invalid draw range: {input:?} (expected a count and unit, e.g. \"12d\", \"3m\", \"1y\")")]
    InvalidDrawRange {
        /// The rejected input.
        input: String,
    },

    /// Returned when year/month/day components do not form a date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}
