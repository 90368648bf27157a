//! The calendar abstraction consumed by the model builder, and its
//! Gregorian implementation.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::draw_range::DateUnit;
use crate::error::CalendarError;

/// English month names, January first.
pub const ENGLISH_MONTH_SYMBOLS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Sunday first.
pub const ENGLISH_WEEKDAY_SYMBOLS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Date components, weekday layout and arithmetic for a calendar.
///
/// Weekdays are 1-based indices in `1..=weekday_count()`. The provided
/// methods implement the proleptic Gregorian calendar with Sunday = 1, so an
/// implementation usually only decides [`first_weekday`](Self::first_weekday)
/// and, optionally, its symbol tables.
pub trait CalendarSystem {
    /// 1-based index of the weekday that starts a week row.
    fn first_weekday(&self) -> u8;

    /// Number of weekdays in a week row.
    fn weekday_count(&self) -> u8 {
        7
    }

    /// 1-based weekday index of `date`.
    fn weekday(&self, date: NaiveDate) -> u8 {
        date.weekday().number_from_sunday() as u8
    }

    /// Year component of `date`.
    fn year(&self, date: NaiveDate) -> i32 {
        date.year()
    }

    /// 1-based month component of `date`.
    fn month(&self, date: NaiveDate) -> u32 {
        date.month()
    }

    /// 1-based day-of-month component of `date`.
    fn day(&self, date: NaiveDate) -> u32 {
        date.day()
    }

    /// Adds `amount` units to `date`, or `None` when the result is not
    /// representable.
    fn add(&self, date: NaiveDate, amount: i64, unit: DateUnit) -> Option<NaiveDate> {
        gregorian_add(date, amount, unit)
    }

    /// Localized name of a 1-based month.
    fn month_symbol(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        ENGLISH_MONTH_SYMBOLS.get(index).copied()
    }

    /// Localized name of a 1-based weekday.
    fn weekday_symbol(&self, weekday: u8) -> Option<&str> {
        let index = usize::from(weekday).checked_sub(1)?;
        ENGLISH_WEEKDAY_SYMBOLS.get(index).copied()
    }

    /// Like [`add`](Self::add), but reports a missing result as
    /// [`CalendarError::ArithmeticOverflow`].
    fn try_add(
        &self,
        date: NaiveDate,
        amount: i64,
        unit: DateUnit,
    ) -> Result<NaiveDate, CalendarError> {
        self.add(date, amount, unit)
            .ok_or(CalendarError::ArithmeticOverflow { date, amount, unit })
    }

    /// Whether `a` and `b` fall in the same month of the same year.
    fn same_month(&self, a: NaiveDate, b: NaiveDate) -> bool {
        self.year(a) == self.year(b) && self.month(a) == self.month(b)
    }

    /// Weekday symbols in display order, starting at the first weekday.
    fn ordered_weekday_symbols(&self) -> Vec<&str> {
        let count = self.weekday_count();
        let first = self.first_weekday();
        (0..count)
            .filter_map(|offset| {
                let index = (first.saturating_sub(1) + offset) % count + 1;
                self.weekday_symbol(index)
            })
            .collect()
    }
}

fn gregorian_add(date: NaiveDate, amount: i64, unit: DateUnit) -> Option<NaiveDate> {
    match unit {
        DateUnit::Day => {
            let days = Days::new(amount.unsigned_abs());
            if amount >= 0 {
                date.checked_add_days(days)
            } else {
                date.checked_sub_days(days)
            }
        }
        DateUnit::Month => {
            let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
            if amount >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
        }
        DateUnit::Year => gregorian_add(date, amount.checked_mul(12)?, DateUnit::Month),
    }
}

/// The Gregorian calendar with a configurable first weekday and symbol
/// tables.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use monthgrid_calendar::{CalendarSystem, Gregorian};
///
/// let cal = Gregorian::new(Weekday::Mon);
/// assert_eq!(cal.first_weekday(), 2);
/// assert_eq!(cal.ordered_weekday_symbols()[0], "Monday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gregorian {
    first_weekday: Weekday,
    month_symbols: Vec<String>,
    weekday_symbols: Vec<String>,
}

impl Gregorian {
    /// Creates a Gregorian calendar whose week rows start on `first_weekday`,
    /// with English symbols.
    pub fn new(first_weekday: Weekday) -> Self {
        Self {
            first_weekday,
            month_symbols: ENGLISH_MONTH_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            weekday_symbols: ENGLISH_WEEKDAY_SYMBOLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Creates a calendar from a 1-based first-weekday index (Sunday = 1).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFirstWeekday`] if `index` is not in
    /// 1..=7.
    pub fn from_first_weekday_index(index: u8) -> Result<Self, CalendarError> {
        let weekday = usize::from(index)
            .checked_sub(1)
            .and_then(|i| WEEKDAYS_FROM_SUNDAY.get(i))
            .ok_or(CalendarError::InvalidFirstWeekday {
                index,
                weekday_count: 7,
            })?;
        Ok(Self::new(*weekday))
    }

    /// Replaces the month names (January first).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSymbolCount`] unless exactly 12
    /// names are given.
    pub fn with_month_symbols(mut self, symbols: Vec<String>) -> Result<Self, CalendarError> {
        if symbols.len() != ENGLISH_MONTH_SYMBOLS.len() {
            return Err(CalendarError::InvalidSymbolCount {
                kind: "month",
                expected: ENGLISH_MONTH_SYMBOLS.len(),
                actual: symbols.len(),
            });
        }
        self.month_symbols = symbols;
        Ok(self)
    }

    /// Replaces the weekday names (Sunday first).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSymbolCount`] unless exactly 7
    /// names are given.
    pub fn with_weekday_symbols(mut self, symbols: Vec<String>) -> Result<Self, CalendarError> {
        if symbols.len() != ENGLISH_WEEKDAY_SYMBOLS.len() {
            return Err(CalendarError::InvalidSymbolCount {
                kind: "weekday",
                expected: ENGLISH_WEEKDAY_SYMBOLS.len(),
                actual: symbols.len(),
            });
        }
        self.weekday_symbols = symbols;
        Ok(self)
    }

    /// The first weekday as a [`Weekday`].
    pub fn first_weekday_day(&self) -> Weekday {
        self.first_weekday
    }
}

impl Default for Gregorian {
    /// Sunday-first, as in the `en_US` locale.
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl CalendarSystem for Gregorian {
    fn first_weekday(&self) -> u8 {
        self.first_weekday.number_from_sunday() as u8
    }

    fn month_symbol(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_symbols.get(index).map(String::as_str)
    }

    fn weekday_symbol(&self, weekday: u8) -> Option<&str> {
        let index = usize::from(weekday).checked_sub(1)?;
        self.weekday_symbols.get(index).map(String::as_str)
    }
}
