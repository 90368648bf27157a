//! Year → Month → Day calendar model.
//!
//! Builds the cell tree a month-grid calendar draws: every date of the
//! requested window plus the leading and trailing placeholder days that pad
//! each month to whole week rows. Each cell carries a [`RangeType`]:
//!
//! | Cell | Range type |
//! |------|------------|
//! | Date inside the window | `InsideRange(CurrentMonth)` |
//! | Padding before the window start | `OutOfRange(CurrentMonth \| PreviousMonth)` |
//! | Padding from a neighbouring month inside the window | `InsideRange(PreviousMonth \| NextMonth)` |
//! | Padding after the window end | `OutOfRange(CurrentMonth \| NextMonth)` |
//!
//! # Quick start
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use monthgrid_calendar::{DrawRange, Gregorian};
//! use monthgrid_model::{BuildOptions, MonthContext, build_for_range};
//!
//! let cal = Gregorian::new(Weekday::Mon);
//! let anchor = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let years = build_for_range(&cal, anchor, DrawRange::Month(1), &BuildOptions::new()).unwrap();
//!
//! let january = MonthContext::new(&years[0], &years[0].months()[0], &cal);
//! assert_eq!(january.title(), "January 2025");
//! assert_eq!(january.month().days().len() % 7, 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! build_for_range()
//!   ├─ resolve_window()          (monthgrid-calendar)
//!   └─ build_model_with()        (builder.rs)
//!        ├─ validate first weekday
//!        ├─ apply ReversedRange  (options.rs)
//!        └─ day_sequence() walk
//!             ├─ open Year / Month nodes
//!             ├─ leading placeholders
//!             ├─ current day
//!             └─ trailing placeholders
//! ```
//!
//! Renderers consume the tree through [`YearContext`], [`MonthContext`] and
//! [`DayContext`]; interactive hosts track picks with [`SingleSelection`] and
//! [`RangeSelection`].

pub mod builder;
pub mod context;
pub mod error;
pub mod model;
pub mod options;
pub mod selection;

pub use builder::{
    build_for_range, build_model, build_model_with, leading_placeholder_count,
    trailing_placeholder_count,
};
pub use context::{DayContext, MonthContext, RangePosition, YearContext};
pub use error::ModelError;
pub use model::{DateClass, Day, Month, RangeType, Year, walk_days};
pub use options::{BuildOptions, OverflowPolicy, ReversedRange};
pub use selection::{Highlight, RangeSelection, SelectionState, SingleSelection};
