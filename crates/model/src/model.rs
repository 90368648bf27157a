//! Year → Month → Day tree nodes and day classification.

use chrono::NaiveDate;
use monthgrid_calendar::{CalendarSystem, MonthKey};

/// Which month a day belongs to, relative to the month it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateClass {
    /// Placeholder from the month before.
    PreviousMonth,
    /// A day of the month being drawn.
    CurrentMonth,
    /// Placeholder from the month after.
    NextMonth,
}

/// Whether a day lies inside the requested draw window, plus its
/// [`DateClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeType {
    /// Outside `[start, end]` of the draw window.
    OutOfRange(DateClass),
    /// Inside `[start, end]` of the draw window.
    InsideRange(DateClass),
}

impl RangeType {
    /// The month classification, regardless of range.
    pub fn date_class(self) -> DateClass {
        match self {
            RangeType::OutOfRange(class) | RangeType::InsideRange(class) => class,
        }
    }

    /// `true` for [`RangeType::OutOfRange`].
    pub fn is_out_of_range(self) -> bool {
        matches!(self, RangeType::OutOfRange(_))
    }

    /// `true` for [`RangeType::InsideRange`].
    pub fn is_inside_range(self) -> bool {
        matches!(self, RangeType::InsideRange(_))
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    day: u32,
    date: NaiveDate,
    range_type: RangeType,
}

impl Day {
    /// Creates a day cell.
    pub fn new(day: u32, date: NaiveDate, range_type: RangeType) -> Self {
        Self {
            day,
            date,
            range_type,
        }
    }

    /// 1-based day of month of [`date`](Self::date).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The calendar date of this cell.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Range and month classification.
    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    /// Whether the day belongs to the month it is drawn in.
    pub fn is_current_month(&self) -> bool {
        self.range_type.date_class() == DateClass::CurrentMonth
    }

    /// `is_current_month() && range_type().is_inside_range()`.
    pub fn is_in_range_current_month(&self) -> bool {
        self.is_current_month() && self.range_type.is_inside_range()
    }

    pub fn is_previous_month(&self) -> bool {
        self.range_type.date_class() == DateClass::PreviousMonth
    }

    pub fn is_in_range_previous_month(&self) -> bool {
        self.is_previous_month() && self.range_type.is_inside_range()
    }

    pub fn is_next_month(&self) -> bool {
        self.range_type.date_class() == DateClass::NextMonth
    }

    pub fn is_in_range_next_month(&self) -> bool {
        self.is_next_month() && self.range_type.is_inside_range()
    }

    /// Whether the cell shows content. Only in-range days of the drawn month
    /// are visible unless `include_blanks` is set.
    pub fn is_visible(&self, include_blanks: bool) -> bool {
        include_blanks || self.range_type == RangeType::InsideRange(DateClass::CurrentMonth)
    }
}

/// A month node: its number and its padded day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    month: u32,
    days: Vec<Day>,
}

impl Month {
    pub(crate) fn new(month: u32) -> Self {
        Self {
            month,
            days: Vec::new(),
        }
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day cells, leading and trailing placeholders included.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Identity of this month within `year`.
    pub fn key(&self, year: &Year) -> MonthKey {
        MonthKey::new(year.year(), self.month)
    }

    /// Days that belong to this month and the draw window.
    pub fn in_range_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|d| d.is_in_range_current_month())
    }

    /// Number of week rows, rounding a partial row up.
    pub fn week_count<C>(&self, calendar: &C) -> usize
    where
        C: CalendarSystem + ?Sized,
    {
        let per_week = usize::from(calendar.weekday_count()).max(1);
        self.days.len().div_ceil(per_week)
    }

    pub(crate) fn push(&mut self, day: Day) {
        self.days.push(day);
    }
}

/// A year node holding its months in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    year: i32,
    months: Vec<Month>,
}

impl Year {
    pub(crate) fn new(year: i32) -> Self {
        Self {
            year,
            months: Vec::new(),
        }
    }

    /// The year number.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Months in chronological order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Looks up a month by number.
    pub fn month(&self, month: u32) -> Option<&Month> {
        self.months.iter().find(|m| m.month == month)
    }

    pub(crate) fn months_mut(&mut self) -> &mut Vec<Month> {
        &mut self.months
    }
}

/// Every day of `years` together with its parent nodes, in drawing order.
pub fn walk_days(years: &[Year]) -> impl Iterator<Item = (&Year, &Month, &Day)> {
    years.iter().flat_map(|year| {
        year.months()
            .iter()
            .flat_map(move |month| month.days().iter().map(move |day| (year, month, day)))
    })
}
