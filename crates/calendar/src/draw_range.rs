//! Draw ranges and the date window they resolve to.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::date::{snap_to_month_end, snap_to_month_start};
use crate::error::CalendarError;
use crate::system::CalendarSystem;

/// Unit of calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Whole days.
    Day,
    /// Calendar months; day-of-month is clamped to the target month.
    Month,
    /// Calendar years.
    Year,
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateUnit::Day => "day",
            DateUnit::Month => "month",
            DateUnit::Year => "year",
        };
        f.write_str(name)
    }
}

/// How far a calendar extends past its start date.
///
/// Parses from and formats to a compact `<count><unit>` form: `"12d"`,
/// `"3m"`, `"1y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawRange {
    /// `n` days.
    Day(u32),
    /// `n` months.
    Month(u32),
    /// `n` years.
    Year(u32),
}

impl Default for DrawRange {
    fn default() -> Self {
        DrawRange::Year(1)
    }
}

impl DrawRange {
    /// Returns the unit of this range.
    pub fn unit(self) -> DateUnit {
        match self {
            DrawRange::Day(_) => DateUnit::Day,
            DrawRange::Month(_) => DateUnit::Month,
            DrawRange::Year(_) => DateUnit::Year,
        }
    }

    /// Returns the number of units.
    pub fn count(self) -> u32 {
        match self {
            DrawRange::Day(n) | DrawRange::Month(n) | DrawRange::Year(n) => n,
        }
    }

    /// Returns the last date covered by this range when it starts at `start`.
    ///
    /// The range is half-open in calendar units, so the result is
    /// `start + count units - 1 day`: `Month(1)` from 2025-02-01 ends on
    /// 2025-02-28.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyDrawRange`] for a zero count, and
    /// [`CalendarError::ArithmeticOverflow`] if the calendar cannot compute
    /// the end date.
    pub fn end_date<C>(self, calendar: &C, start: NaiveDate) -> Result<NaiveDate, CalendarError>
    where
        C: CalendarSystem + ?Sized,
    {
        if self.count() == 0 {
            return Err(CalendarError::EmptyDrawRange { unit: self.unit() });
        }
        let after = calendar.try_add(start, i64::from(self.count()), self.unit())?;
        calendar.try_add(after, -1, DateUnit::Day)
    }
}

impl fmt::Display for DrawRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit() {
            DateUnit::Day => 'd',
            DateUnit::Month => 'm',
            DateUnit::Year => 'y',
        };
        write!(f, "{}{suffix}", self.count())
    }
}

impl FromStr for DrawRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDrawRange {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (digits, unit) = trimmed.split_at(split);
        let count: u32 = digits.parse().map_err(|_| invalid())?;
        match unit.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(DrawRange::Day(count)),
            "m" | "month" | "months" => Ok(DrawRange::Month(count)),
            "y" | "year" | "years" => Ok(DrawRange::Year(count)),
            _ => Err(invalid()),
        }
    }
}

/// The inclusive date window a calendar draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DrawWindow {
    /// Creates a window from already-normalized bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First date of the window.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Last date of the window.
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies within `[start, end]`.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window, 0 if `end < start`.
    pub fn day_count(self) -> i64 {
        crate::date::day_count_inclusive(self.start, self.end)
    }
}

/// Resolves the window drawn for `range` around `anchor`.
///
/// The start snaps back to the first day of the anchor's month; the end is
/// `range.end_date(start)` snapped forward to the last day of its month.
///
/// # Errors
///
/// Propagates [`DrawRange::end_date`] and snapping failures.
pub fn resolve_window<C>(
    calendar: &C,
    anchor: NaiveDate,
    range: DrawRange,
) -> Result<DrawWindow, CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let start = snap_to_month_start(calendar, anchor)?;
    let end = snap_to_month_end(calendar, range.end_date(calendar, start)?)?;
    Ok(DrawWindow::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Gregorian;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unit_and_count() {
        assert_eq!(DrawRange::Day(12).unit(), DateUnit::Day);
        assert_eq!(DrawRange::Month(3).unit(), DateUnit::Month);
        assert_eq!(DrawRange::Year(2).unit(), DateUnit::Year);
        assert_eq!(DrawRange::Year(2).count(), 2);
    }

    #[test]
    fn default_is_one_year() {
        assert_eq!(DrawRange::default(), DrawRange::Year(1));
    }

    #[test]
    fn end_date_one_month_non_leap_february() {
        let cal = Gregorian::default();
        let end = DrawRange::Month(1).end_date(&cal, date(2025, 2, 1)).unwrap();
        assert_eq!(end, date(2025, 2, 28));
    }

    #[test]
    fn end_date_one_month_leap_february() {
        let cal = Gregorian::default();
        let end = DrawRange::Month(1).end_date(&cal, date(2024, 2, 1)).unwrap();
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn end_date_days() {
        let cal = Gregorian::default();
        let end = DrawRange::Day(10).end_date(&cal, date(2025, 1, 1)).unwrap();
        assert_eq!(end, date(2025, 1, 10));
    }

    #[test]
    fn end_date_one_year() {
        let cal = Gregorian::default();
        let end = DrawRange::Year(1).end_date(&cal, date(2025, 1, 1)).unwrap();
        assert_eq!(end, date(2025, 12, 31));
    }

    #[test]
    fn end_date_zero_count() {
        let cal = Gregorian::default();
        assert_eq!(
            DrawRange::Day(0).end_date(&cal, date(2025, 1, 1)).unwrap_err(),
            CalendarError::EmptyDrawRange {
                unit: DateUnit::Day
            }
        );
    }

    #[test]
    fn end_date_overflow() {
        let cal = Gregorian::default();
        let err = DrawRange::Year(1).end_date(&cal, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CalendarError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn parse_compact() {
        assert_eq!("12d".parse::<DrawRange>().unwrap(), DrawRange::Day(12));
        assert_eq!("3m".parse::<DrawRange>().unwrap(), DrawRange::Month(3));
        assert_eq!("1y".parse::<DrawRange>().unwrap(), DrawRange::Year(1));
    }

    #[test]
    fn parse_words() {
        assert_eq!("2 years".parse::<DrawRange>().unwrap(), DrawRange::Year(2));
        assert_eq!("1 Month".parse::<DrawRange>().unwrap(), DrawRange::Month(1));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "m", "12", "3w", "-1m", "1.5y"] {
            assert_eq!(
                input.parse::<DrawRange>().unwrap_err(),
                CalendarError::InvalidDrawRange {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn display_matches_parse() {
        for range in [DrawRange::Day(7), DrawRange::Month(18), DrawRange::Year(400)] {
            assert_eq!(range.to_string().parse::<DrawRange>().unwrap(), range);
        }
    }

    #[test]
    fn window_snaps_both_ends() {
        let cal = Gregorian::default();
        let window = resolve_window(&cal, date(2025, 1, 17), DrawRange::Day(20)).unwrap();
        assert_eq!(window.start(), date(2025, 1, 1));
        // Jan 1 + 20 days - 1 = Jan 20, snapped to Jan 31.
        assert_eq!(window.end(), date(2025, 1, 31));
        assert_eq!(window.day_count(), 31);
    }

    #[test]
    fn window_crosses_year() {
        let cal = Gregorian::default();
        let window = resolve_window(&cal, date(2024, 11, 30), DrawRange::Month(3)).unwrap();
        assert_eq!(window.start(), date(2024, 11, 1));
        assert_eq!(window.end(), date(2025, 1, 31));
        assert!(window.contains(date(2024, 12, 25)));
        assert!(!window.contains(date(2025, 2, 1)));
    }
}
