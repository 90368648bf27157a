//! Day-by-day iteration over a date window.

use chrono::NaiveDate;

use crate::draw_range::DateUnit;
use crate::error::CalendarError;
use crate::system::CalendarSystem;

/// Iterator over consecutive dates from `start` to `end` inclusive.
///
/// Advancing uses the calendar's own arithmetic. If the calendar fails to
/// produce a successor before `end` is reached, iteration stops early and
/// [`overflow`](Self::overflow) reports the failure.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use monthgrid_calendar::{Gregorian, day_sequence};
///
/// let cal = Gregorian::default();
/// let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let dates: Vec<_> = day_sequence(&cal, start, end).collect();
/// assert_eq!(dates.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct DaySequence<'a, C: ?Sized> {
    calendar: &'a C,
    cursor: Option<NaiveDate>,
    end: NaiveDate,
    overflow: Option<CalendarError>,
}

impl<'a, C> DaySequence<'a, C>
where
    C: CalendarSystem + ?Sized,
{
    /// Creates a sequence from `start` to `end` inclusive. Empty when
    /// `end < start`.
    pub fn new(calendar: &'a C, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            calendar,
            cursor: Some(start),
            end,
            overflow: None,
        }
    }

    /// The date the next call to `next()` would consider, which may lie past
    /// `end`. `None` once the calendar failed to advance.
    pub fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }

    /// The arithmetic failure that cut the sequence short, if any.
    pub fn overflow(&self) -> Option<&CalendarError> {
        self.overflow.as_ref()
    }
}

impl<C> Iterator for DaySequence<'_, C>
where
    C: CalendarSystem + ?Sized,
{
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.cursor.filter(|date| *date <= self.end)?;
        self.cursor = match self.calendar.try_add(current, 1, DateUnit::Day) {
            Ok(next) => Some(next),
            Err(err) => {
                if current < self.end {
                    self.overflow = Some(err);
                }
                None
            }
        };
        Some(current)
    }
}

/// Iterates the dates of `[start, end]` using `calendar`'s arithmetic.
pub fn day_sequence<C>(calendar: &C, start: NaiveDate, end: NaiveDate) -> DaySequence<'_, C>
where
    C: CalendarSystem + ?Sized,
{
    DaySequence::new(calendar, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Gregorian;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Calendar whose arithmetic refuses to step past a fixed date.
    struct Bounded {
        last: NaiveDate,
    }

    impl CalendarSystem for Bounded {
        fn first_weekday(&self) -> u8 {
            1
        }

        fn add(&self, date: NaiveDate, amount: i64, unit: DateUnit) -> Option<NaiveDate> {
            Gregorian::default()
                .add(date, amount, unit)
                .filter(|d| *d <= self.last)
        }
    }

    #[test]
    fn empty_when_reversed() {
        let cal = Gregorian::default();
        let mut seq = day_sequence(&cal, date(2025, 1, 2), date(2025, 1, 1));
        assert_eq!(seq.next(), None);
        assert!(seq.overflow().is_none());
    }

    #[test]
    fn single() {
        let cal = Gregorian::default();
        let dates: Vec<_> = day_sequence(&cal, date(2025, 6, 15), date(2025, 6, 15)).collect();
        assert_eq!(dates, vec![date(2025, 6, 15)]);
    }

    #[test]
    fn full_leap_year() {
        let cal = Gregorian::default();
        let dates: Vec<_> = day_sequence(&cal, date(2024, 1, 1), date(2024, 12, 31)).collect();
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[59], date(2024, 2, 29));
    }

    #[test]
    fn year_transition() {
        let cal = Gregorian::default();
        let dates: Vec<_> = day_sequence(&cal, date(2024, 12, 30), date(2025, 1, 2)).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 12, 30),
                date(2024, 12, 31),
                date(2025, 1, 1),
                date(2025, 1, 2)
            ]
        );
    }

    #[test]
    fn cursor_runs_one_past_end() {
        let cal = Gregorian::default();
        let mut seq = day_sequence(&cal, date(2025, 1, 30), date(2025, 1, 31));
        assert_eq!(seq.next(), Some(date(2025, 1, 30)));
        assert_eq!(seq.cursor(), Some(date(2025, 1, 31)));
        assert_eq!(seq.next(), Some(date(2025, 1, 31)));
        assert_eq!(seq.cursor(), Some(date(2025, 2, 1)));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn overflow_stops_early() {
        let cal = Bounded {
            last: date(2025, 1, 3),
        };
        let mut seq = day_sequence(&cal, date(2025, 1, 1), date(2025, 1, 10));
        let dates: Vec<_> = seq.by_ref().collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3)]);
        assert_eq!(
            seq.overflow(),
            Some(&CalendarError::ArithmeticOverflow {
                date: date(2025, 1, 3),
                amount: 1,
                unit: DateUnit::Day,
            })
        );
    }

    #[test]
    fn overflow_at_end_is_not_reported() {
        let cal = Gregorian::default();
        let start = NaiveDate::MAX.pred_opt().unwrap();
        let mut seq = day_sequence(&cal, start, NaiveDate::MAX);
        assert_eq!(seq.by_ref().count(), 2);
        assert!(seq.overflow().is_none());
        assert_eq!(seq.cursor(), None);
    }
}
