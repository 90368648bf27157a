//! # monthgrid-calendar
//!
//! The calendar abstraction behind monthgrid: weekday layout, date
//! components, checked date arithmetic, draw ranges and month keys.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarSystem"] -->|".try_add()"| B["NaiveDate"]
//!     C["DrawRange"] -->|"resolve_window()"| D["DrawWindow"]
//!     B -->|"snap_to_month_start/end()"| D
//!     D -->|"day_sequence()"| E["DaySequence"]
//!     B -->|"MonthKey::of()"| F["MonthKey"]
//!     F --> G["MonthScrollTarget"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use monthgrid_calendar::{DrawRange, Gregorian, MonthKey, resolve_window};
//!
//! let cal = Gregorian::new(Weekday::Mon);
//! let anchor = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
//! let window = resolve_window(&cal, anchor, DrawRange::Month(1)).unwrap();
//! assert_eq!(window.start(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
//! assert_eq!(window.end(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
//!
//! assert_eq!(MonthKey::of(&cal, anchor), MonthKey::new(2025, 2));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `system` | `CalendarSystem` trait and the `Gregorian` calendar |
//! | `date` | Month-boundary snapping and day counts |
//! | `draw_range` | Draw ranges, date units and window resolution |
//! | `sequence` | Day-by-day iteration with overflow reporting |
//! | `month_key` | Month identity and scroll targets |
//! | `error` | Error types |

mod date;
mod draw_range;
mod error;
mod month_key;
mod sequence;
mod system;

pub use date::{
    day_count_inclusive, is_first_day_of_month, is_last_day_of_month,
    snap_to_month_end, snap_to_month_start,
};
pub use draw_range::{DateUnit, DrawRange, DrawWindow, resolve_window};
pub use error::CalendarError;
pub use month_key::{MonthKey, MonthScrollTarget};
pub use sequence::{DaySequence, day_sequence};
pub use system::{CalendarSystem, ENGLISH_MONTH_SYMBOLS, ENGLISH_WEEKDAY_SYMBOLS, Gregorian};
