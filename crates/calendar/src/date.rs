//! Month-boundary helpers.

use chrono::NaiveDate;

use crate::draw_range::DateUnit;
use crate::error::CalendarError;
use crate::system::CalendarSystem;

/// Whether `date` is the first day of its month.
pub fn is_first_day_of_month<C>(calendar: &C, date: NaiveDate) -> bool
where
    C: CalendarSystem + ?Sized,
{
    calendar.day(date) == 1
}

/// Whether `date` is the last day of its month.
///
/// A date whose successor cannot be computed is treated as not being the
/// last day of its month.
pub fn is_last_day_of_month<C>(calendar: &C, date: NaiveDate) -> bool
where
    C: CalendarSystem + ?Sized,
{
    calendar
        .add(date, 1, DateUnit::Day)
        .is_some_and(|next| is_first_day_of_month(calendar, next))
}

/// Snaps `date` back to the first day of its month.
///
/// # Errors
///
/// Returns [`CalendarError::ArithmeticOverflow`] if the calendar cannot
/// step back to the first day.
pub fn snap_to_month_start<C>(calendar: &C, date: NaiveDate) -> Result<NaiveDate, CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let offset = i64::from(calendar.day(date)) - 1;
    calendar.try_add(date, -offset, DateUnit::Day)
}

/// Snaps `date` forward to the last day of its month.
///
/// # Errors
///
/// Returns [`CalendarError::ArithmeticOverflow`] if the month after `date`
/// is not representable.
pub fn snap_to_month_end<C>(calendar: &C, date: NaiveDate) -> Result<NaiveDate, CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let start = snap_to_month_start(calendar, date)?;
    let next_month = calendar.try_add(start, 1, DateUnit::Month)?;
    calendar.try_add(next_month, -1, DateUnit::Day)
}

/// Inclusive number of days from `start` to `end`; 0 when `end < start`.
pub fn day_count_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}
