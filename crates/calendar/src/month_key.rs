//! Month identity keys used as scroll targets.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::system::CalendarSystem;

/// The `(year, month)` pair identifying a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a key from its components.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The key of the month containing `date`.
    pub fn of<C>(calendar: &C, date: NaiveDate) -> Self
    where
        C: CalendarSystem + ?Sized,
    {
        Self::new(calendar.year(date), calendar.month(date))
    }

    /// Year component.
    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month component.
    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the components do not name
    /// a Gregorian month.
    pub fn first_day(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(CalendarError::InvalidDate {
            year: self.year,
            month: self.month,
            day: 1,
        })
    }
}

/// A scroll request for "the month containing this date".
///
/// Equality and hashing use only the month key, so any two dates in the same
/// month address the same target. A target without a date has no key and
/// requests no scroll.
#[derive(Debug, Clone, Copy)]
pub struct MonthScrollTarget {
    date: Option<NaiveDate>,
    key: Option<MonthKey>,
}

impl MonthScrollTarget {
    /// Creates a target for the month containing `date`.
    pub fn new<C>(calendar: &C, date: Option<NaiveDate>) -> Self
    where
        C: CalendarSystem + ?Sized,
    {
        Self {
            date,
            key: date.map(|d| MonthKey::of(calendar, d)),
        }
    }

    /// Creates a target addressing a month directly.
    ///
    /// # Errors
    ///
    /// Propagates [`MonthKey::first_day`] failures.
    pub fn for_month(key: MonthKey) -> Result<Self, CalendarError> {
        Ok(Self {
            date: Some(key.first_day()?),
            key: Some(key),
        })
    }

    /// The date this target was created from.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The month to scroll to, if any.
    pub fn key(&self) -> Option<MonthKey> {
        self.key
    }
}

impl PartialEq for MonthScrollTarget {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for MonthScrollTarget {}

impl Hash for MonthScrollTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
