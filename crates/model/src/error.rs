//! Error types for the monthgrid-model crate.

use chrono::NaiveDate;
use monthgrid_calendar::CalendarError;

/// Error type for model construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Returned when the window start lies after its end and the build
    /// options reject reversed ranges.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first date.
        start: NaiveDate,
        /// Requested last date.
        end: NaiveDate,
    },

    /// A calendar configuration or arithmetic failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
