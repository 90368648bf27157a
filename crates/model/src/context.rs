//! Per-node views handed to renderers: a node plus its parents and the
//! calendar that produced it.

use std::cmp::Ordering;

use chrono::NaiveDate;
use monthgrid_calendar::{CalendarSystem, MonthScrollTarget};

use crate::model::{Day, Month, Year};

/// Where a day lies relative to an optional `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePosition {
    /// Same day as the start bound.
    EqualToStart,
    /// Same day as the end bound, and not the start.
    EqualToEnd,
    /// Strictly between the bounds.
    Inside,
    BeforeStart,
    AfterEnd,
    /// Only the end bound is set.
    MissingStart,
    /// Only the start bound is set.
    MissingEnd,
    /// Neither bound is set.
    MissingRange,
}

impl RangePosition {
    /// Classifies `date` against `start` and `end`.
    ///
    /// The start comparison wins, so a day equal to both bounds is
    /// [`EqualToStart`](Self::EqualToStart). With `start > end`, days after
    /// the start report [`AfterEnd`](Self::AfterEnd).
    pub fn of(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let (start, end) = match (start, end) {
            (None, None) => return RangePosition::MissingRange,
            (None, Some(_)) => return RangePosition::MissingStart,
            (Some(_), None) => return RangePosition::MissingEnd,
            (Some(start), Some(end)) => (start, end),
        };
        match date.cmp(&start) {
            Ordering::Less => RangePosition::BeforeStart,
            Ordering::Equal => RangePosition::EqualToStart,
            Ordering::Greater => match date.cmp(&end) {
                Ordering::Less => RangePosition::Inside,
                Ordering::Equal => RangePosition::EqualToEnd,
                Ordering::Greater => RangePosition::AfterEnd,
            },
        }
    }
}

/// A day together with its month, year and calendar.
#[derive(Debug)]
pub struct DayContext<'a, C: ?Sized> {
    year: &'a Year,
    month: &'a Month,
    day: &'a Day,
    calendar: &'a C,
}

impl<C: ?Sized> Clone for DayContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for DayContext<'_, C> {}

impl<'a, C> DayContext<'a, C>
where
    C: CalendarSystem + ?Sized,
{
    pub fn new(year: &'a Year, month: &'a Month, day: &'a Day, calendar: &'a C) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    pub fn year(&self) -> &'a Year {
        self.year
    }

    pub fn month(&self) -> &'a Month {
        self.month
    }

    pub fn day(&self) -> &'a Day {
        self.day
    }

    pub fn calendar(&self) -> &'a C {
        self.calendar
    }

    pub fn is_out_of_range(&self) -> bool {
        self.day.range_type().is_out_of_range()
    }

    /// Whether the day lies before `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.day.date() < today
    }

    /// Orders the day against `date`; `None` when there is no date.
    pub fn compare_day(&self, date: Option<NaiveDate>) -> Option<Ordering> {
        date.map(|d| self.day.date().cmp(&d))
    }

    pub fn is_same_day(&self, date: Option<NaiveDate>) -> bool {
        self.compare_day(date) == Some(Ordering::Equal)
    }

    pub fn is_same_day_as(&self, other: Option<&Day>) -> bool {
        self.is_same_day(other.map(Day::date))
    }

    /// See [`RangePosition::of`].
    pub fn position_in(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> RangePosition {
        RangePosition::of(self.day.date(), start, end)
    }
}

/// A month together with its year and calendar.
#[derive(Debug)]
pub struct MonthContext<'a, C: ?Sized> {
    year: &'a Year,
    month: &'a Month,
    calendar: &'a C,
}

impl<C: ?Sized> Clone for MonthContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for MonthContext<'_, C> {}

impl<'a, C> MonthContext<'a, C>
where
    C: CalendarSystem + ?Sized,
{
    pub fn new(year: &'a Year, month: &'a Month, calendar: &'a C) -> Self {
        Self {
            year,
            month,
            calendar,
        }
    }

    pub fn year(&self) -> &'a Year {
        self.year
    }

    pub fn month(&self) -> &'a Month {
        self.month
    }

    pub fn calendar(&self) -> &'a C {
        self.calendar
    }

    /// Calendar name of the month.
    pub fn month_symbol(&self) -> Option<&'a str> {
        self.calendar.month_symbol(self.month.month())
    }

    /// `"<month symbol> <year>"`, falling back to the month number when the
    /// calendar has no symbol for it.
    pub fn title(&self) -> String {
        match self.month_symbol() {
            Some(symbol) => format!("{symbol} {}", self.year.year()),
            None => format!("{} {}", self.month.month(), self.year.year()),
        }
    }

    /// Scroll target addressing this month.
    pub fn scroll_target(&self) -> MonthScrollTarget {
        let first_day = self.month.key(self.year).first_day().ok();
        MonthScrollTarget::new(self.calendar, first_day)
    }

    /// Contexts of this month's day cells, in drawing order.
    pub fn days(&self) -> impl Iterator<Item = DayContext<'a, C>> + 'a {
        let (year, month, calendar) = (self.year, self.month, self.calendar);
        month
            .days()
            .iter()
            .map(move |day| DayContext::new(year, month, day, calendar))
    }
}

/// A year together with its calendar.
#[derive(Debug)]
pub struct YearContext<'a, C: ?Sized> {
    year: &'a Year,
    calendar: &'a C,
}

impl<C: ?Sized> Clone for YearContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for YearContext<'_, C> {}

impl<'a, C> YearContext<'a, C>
where
    C: CalendarSystem + ?Sized,
{
    pub fn new(year: &'a Year, calendar: &'a C) -> Self {
        Self { year, calendar }
    }

    pub fn year(&self) -> &'a Year {
        self.year
    }

    pub fn calendar(&self) -> &'a C {
        self.calendar
    }

    pub fn title(&self) -> String {
        self.year.year().to_string()
    }

    /// Contexts of this year's months, in order.
    pub fn months(&self) -> impl Iterator<Item = MonthContext<'a, C>> + 'a {
        let (year, calendar) = (self.year, self.calendar);
        year.months()
            .iter()
            .map(move |month| MonthContext::new(year, month, calendar))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use monthgrid_calendar::{Gregorian, MonthKey};

    use super::*;
    use crate::builder::build_model;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_position_missing_bounds() {
        let d = date(2025, 3, 10);
        assert_eq!(RangePosition::of(d, None, None), RangePosition::MissingRange);
        assert_eq!(RangePosition::of(d, None, Some(d)), RangePosition::MissingStart);
        assert_eq!(RangePosition::of(d, Some(d), None), RangePosition::MissingEnd);
    }

    #[test]
    fn range_position_bounds() {
        let (start, end) = (Some(date(2025, 3, 5)), Some(date(2025, 3, 20)));
        assert_eq!(RangePosition::of(date(2025, 3, 1), start, end), RangePosition::BeforeStart);
        assert_eq!(RangePosition::of(date(2025, 3, 5), start, end), RangePosition::EqualToStart);
        assert_eq!(RangePosition::of(date(2025, 3, 10), start, end), RangePosition::Inside);
        assert_eq!(RangePosition::of(date(2025, 3, 20), start, end), RangePosition::EqualToEnd);
        assert_eq!(RangePosition::of(date(2025, 3, 21), start, end), RangePosition::AfterEnd);
    }

    #[test]
    fn range_position_start_wins_on_single_day() {
        let d = Some(date(2025, 3, 5));
        assert_eq!(RangePosition::of(date(2025, 3, 5), d, d), RangePosition::EqualToStart);
    }

    #[test]
    fn day_context_comparisons() {
        let cal = Gregorian::new(Weekday::Mon);
        let years = build_model(&cal, date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        let year = &years[0];
        let month = &year.months()[0];
        let first = &month.days()[0];
        let ctx = DayContext::new(year, month, first, &cal);

        assert!(ctx.is_out_of_range());
        assert!(ctx.is_past(date(2025, 1, 1)));
        assert_eq!(ctx.compare_day(None), None);
        assert_eq!(ctx.compare_day(Some(date(2025, 1, 1))), Some(Ordering::Less));
        assert!(ctx.is_same_day(Some(date(2024, 12, 30))));
        assert!(ctx.is_same_day_as(Some(first)));
        assert!(!ctx.is_same_day_as(None));
    }

    #[test]
    fn month_context_title_and_target() {
        let cal = Gregorian::default();
        let years = build_model(&cal, date(2025, 2, 1), date(2025, 2, 28)).unwrap();
        let ctx = MonthContext::new(&years[0], &years[0].months()[0], &cal);
        assert_eq!(ctx.month_symbol(), Some("February"));
        assert_eq!(ctx.title(), "February 2025");
        assert_eq!(ctx.scroll_target().key(), Some(MonthKey::new(2025, 2)));
        assert_eq!(ctx.days().count(), 35);
        assert_eq!(ctx.days().filter(|d| !d.is_out_of_range()).count(), 28);
    }

    #[test]
    fn year_context_months() {
        let cal = Gregorian::default();
        let years = build_model(&cal, date(2025, 1, 1), date(2025, 3, 31)).unwrap();
        let ctx = YearContext::new(&years[0], &cal);
        assert_eq!(ctx.title(), "2025");
        let titles: Vec<_> = ctx.months().map(|m| m.title()).collect();
        assert_eq!(titles, ["January 2025", "February 2025", "March 2025"]);
    }
}
