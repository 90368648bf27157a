//! Construction of the Year → Month → Day tree.

use chrono::NaiveDate;
use monthgrid_calendar::{
    CalendarError, CalendarSystem, DateUnit, DrawRange, day_sequence, is_first_day_of_month,
    is_last_day_of_month, resolve_window,
};
use tracing::{debug, trace, warn};

use crate::error::ModelError;
use crate::model::{DateClass, Day, Month, RangeType, Year};
use crate::options::{BuildOptions, OverflowPolicy, ReversedRange};

/// Number of placeholder days drawn before `date` so that its week row
/// starts on the calendar's first weekday.
///
/// The calendar's first weekday must lie in `1..=weekday_count`.
pub fn leading_placeholder_count<C>(calendar: &C, date: NaiveDate) -> u8
where
    C: CalendarSystem + ?Sized,
{
    let count = calendar.weekday_count();
    (calendar.weekday(date) + count - calendar.first_weekday()) % count
}

/// Number of placeholder days drawn after `date` so that its week row ends
/// on the weekday before the calendar's first weekday.
pub fn trailing_placeholder_count<C>(calendar: &C, date: NaiveDate) -> u8
where
    C: CalendarSystem + ?Sized,
{
    let count = calendar.weekday_count();
    (count - calendar.weekday(date) + calendar.first_weekday() - 1) % count
}

/// Builds the model for `[start, end]` with default [`BuildOptions`].
///
/// # Errors
///
/// See [`build_model_with`].
pub fn build_model<C>(calendar: &C, start: NaiveDate, end: NaiveDate) -> Result<Vec<Year>, ModelError>
where
    C: CalendarSystem + ?Sized,
{
    build_model_with(calendar, start, end, &BuildOptions::default())
}

/// Builds the Year → Month → Day tree for `[start, end]`.
///
/// Every date of the window becomes an `InsideRange(CurrentMonth)` day. Each
/// month is padded with placeholder days so that its cells fill whole week
/// rows: leading placeholders before the first iterated day and every 1st of
/// a month, trailing placeholders after every last day of a month and after
/// `end`. Placeholders are classified against the window bounds, so padding
/// that falls into a neighbouring month of the same window stays
/// `InsideRange`.
///
/// Callers normally pass a window from
/// [`resolve_window`](monthgrid_calendar::resolve_window), whose bounds are
/// whole months.
///
/// # Errors
///
/// - [`ModelError::InvalidRange`] if `start > end` and the options reject
///   reversed ranges.
/// - [`CalendarError::InvalidFirstWeekday`] if the calendar reports a first
///   weekday outside `1..=weekday_count`.
/// - [`CalendarError::ArithmeticOverflow`] if date arithmetic fails and the
///   overflow policy is [`OverflowPolicy::Fail`]. With
///   [`OverflowPolicy::Truncate`] unrepresentable placeholders are skipped,
///   and if the day walk itself cannot advance the tree built so far is
///   returned.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use monthgrid_calendar::Gregorian;
/// use monthgrid_model::build_model;
///
/// let cal = Gregorian::new(Weekday::Mon);
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let years = build_model(&cal, start, end).unwrap();
///
/// let january = &years[0].months()[0];
/// assert_eq!(january.days().len(), 35); // 2 leading + 31 + 2 trailing
/// ```
#[tracing::instrument(skip_all, fields(%start, %end))]
pub fn build_model_with<C>(
    calendar: &C,
    start: NaiveDate,
    end: NaiveDate,
    options: &BuildOptions,
) -> Result<Vec<Year>, ModelError>
where
    C: CalendarSystem + ?Sized,
{
    validate_weekdays(calendar)?;

    let end = if start > end {
        match options.reversed_range() {
            ReversedRange::Reject => return Err(ModelError::InvalidRange { start, end }),
            ReversedRange::SingleDay => {
                debug!(%start, %end, "reversed range: building single day");
                start
            }
        }
    } else {
        end
    };

    let mut tree = TreeBuilder::new(calendar, start, end, options.overflow());
    match tree.run() {
        Ok(()) => {
            debug!(n_years = tree.years.len(), "model built");
            Ok(tree.years)
        }
        Err(ModelError::Calendar(err @ CalendarError::ArithmeticOverflow { .. }))
            if options.overflow() == OverflowPolicy::Truncate =>
        {
            warn!(%err, n_years = tree.years.len(), "calendar arithmetic overflow, model truncated");
            Ok(tree.years)
        }
        Err(err) => Err(err),
    }
}

/// Resolves the window for `range` around `anchor` and builds its model.
///
/// # Errors
///
/// Propagates [`resolve_window`] failures and [`build_model_with`] errors.
pub fn build_for_range<C>(
    calendar: &C,
    anchor: NaiveDate,
    range: DrawRange,
    options: &BuildOptions,
) -> Result<Vec<Year>, ModelError>
where
    C: CalendarSystem + ?Sized,
{
    let window = resolve_window(calendar, anchor, range)?;
    debug!(%anchor, %range, start = %window.start(), end = %window.end(), "resolved draw window");
    build_model_with(calendar, window.start(), window.end(), options)
}

fn validate_weekdays<C>(calendar: &C) -> Result<(), CalendarError>
where
    C: CalendarSystem + ?Sized,
{
    let first = calendar.first_weekday();
    let weekday_count = calendar.weekday_count();
    if first == 0 || first > weekday_count {
        return Err(CalendarError::InvalidFirstWeekday {
            index: first,
            weekday_count,
        });
    }
    Ok(())
}

/// Accumulates the tree while walking the window day by day.
struct TreeBuilder<'a, C: ?Sized> {
    calendar: &'a C,
    start: NaiveDate,
    end: NaiveDate,
    overflow: OverflowPolicy,
    years: Vec<Year>,
}

impl<'a, C> TreeBuilder<'a, C>
where
    C: CalendarSystem + ?Sized,
{
    fn new(calendar: &'a C, start: NaiveDate, end: NaiveDate, overflow: OverflowPolicy) -> Self {
        Self {
            calendar,
            start,
            end,
            overflow,
            years: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), ModelError> {
        let calendar = self.calendar;
        let mut days = day_sequence(calendar, self.start, self.end);

        while let Some(date) = days.next() {
            self.open_nodes(date);

            if date == self.start || is_first_day_of_month(calendar, date) {
                self.push_leading(date)?;
            }

            self.current_month().push(Day::new(
                calendar.day(date),
                date,
                RangeType::InsideRange(DateClass::CurrentMonth),
            ));

            let next = days.cursor();
            if next.is_none() && date < self.end {
                let err = days
                    .overflow()
                    .cloned()
                    .unwrap_or(CalendarError::ArithmeticOverflow {
                        date,
                        amount: 1,
                        unit: DateUnit::Day,
                    });
                return Err(err.into());
            }

            if date == self.end || is_last_day_of_month(calendar, date) {
                self.push_trailing(date)?;
            }
        }
        Ok(())
    }

    /// Appends a year and/or month node when `date` leaves the current ones.
    fn open_nodes(&mut self, date: NaiveDate) {
        let year = self.calendar.year(date);
        let month = self.calendar.month(date);
        match self.years.last_mut() {
            Some(last) if last.year() == year => {
                let months = last.months_mut();
                if months.last().map(Month::month) != Some(month) {
                    months.push(Month::new(month));
                }
            }
            _ => {
                let mut node = Year::new(year);
                node.months_mut().push(Month::new(month));
                self.years.push(node);
            }
        }
    }

    fn current_month(&mut self) -> &mut Month {
        self.years
            .last_mut()
            .and_then(|year| year.months_mut().last_mut())
            .expect("open_nodes pushes a month before any day")
    }

    /// The padding date `offset` days from `date`. Under
    /// [`OverflowPolicy::Truncate`] an unrepresentable padding date is
    /// dropped and the month keeps its in-range days.
    fn placeholder(&self, date: NaiveDate, offset: i64) -> Result<Option<NaiveDate>, ModelError> {
        match self.calendar.try_add(date, offset, DateUnit::Day) {
            Ok(placeholder) => Ok(Some(placeholder)),
            Err(err) if self.overflow == OverflowPolicy::Truncate => {
                warn!(%err, "placeholder outside representable dates, dropped");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn push_leading(&mut self, date: NaiveDate) -> Result<(), ModelError> {
        let calendar = self.calendar;
        let count = leading_placeholder_count(calendar, date);
        for offset in (1..=count).rev() {
            let Some(placeholder) = self.placeholder(date, -i64::from(offset))? else {
                continue;
            };
            let range_type = if placeholder < self.start {
                RangeType::OutOfRange(if calendar.same_month(placeholder, self.start) {
                    DateClass::CurrentMonth
                } else {
                    DateClass::PreviousMonth
                })
            } else {
                RangeType::InsideRange(DateClass::PreviousMonth)
            };
            self.current_month()
                .push(Day::new(calendar.day(placeholder), placeholder, range_type));
        }
        if count > 0 {
            trace!(%date, count, "leading placeholders");
        }
        Ok(())
    }

    fn push_trailing(&mut self, date: NaiveDate) -> Result<(), ModelError> {
        let calendar = self.calendar;
        let count = trailing_placeholder_count(calendar, date);
        for offset in 1..=count {
            let Some(placeholder) = self.placeholder(date, i64::from(offset))? else {
                continue;
            };
            let range_type = if placeholder > self.end {
                RangeType::OutOfRange(if calendar.same_month(placeholder, self.end) {
                    DateClass::CurrentMonth
                } else {
                    DateClass::NextMonth
                })
            } else {
                RangeType::InsideRange(DateClass::NextMonth)
            };
            self.current_month()
                .push(Day::new(calendar.day(placeholder), placeholder, range_type));
        }
        if count > 0 {
            trace!(%date, count, "trailing placeholders");
        }
        Ok(())
    }
}
