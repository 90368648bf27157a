//! Structural properties of built models across weekday layouts and windows.

use chrono::{NaiveDate, Weekday};
use monthgrid_calendar::{CalendarSystem, DrawRange, Gregorian, day_count_inclusive};
use monthgrid_model::{BuildOptions, RangeType, Year, build_for_range, build_model, walk_days};

const FIRST_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn windows() -> Vec<(NaiveDate, NaiveDate)> {
    vec![
        (date(2025, 1, 1), date(2025, 1, 31)),
        (date(2024, 1, 1), date(2024, 12, 31)),
        (date(2024, 11, 1), date(2025, 2, 28)),
        (date(2025, 3, 12), date(2025, 3, 12)),
        (date(2025, 3, 12), date(2025, 5, 7)),
        (date(2023, 12, 31), date(2024, 1, 1)),
        (date(2024, 2, 1), date(2024, 2, 29)),
    ]
}

fn check_all(check: impl Fn(&Gregorian, NaiveDate, NaiveDate, &[Year])) {
    for first in FIRST_WEEKDAYS {
        let cal = Gregorian::new(first);
        for (start, end) in windows() {
            let years = build_model(&cal, start, end).unwrap();
            check(&cal, start, end, &years);
        }
    }
}

#[test]
fn in_range_current_month_days_match_window_length() {
    check_all(|_, start, end, years| {
        let count = walk_days(years)
            .filter(|(_, _, d)| d.is_in_range_current_month())
            .count();
        assert_eq!(
            count as i64,
            day_count_inclusive(start, end),
            "window {start}..={end}"
        );
    });
}

#[test]
fn months_fill_whole_week_rows() {
    check_all(|cal, start, end, years| {
        for year in years {
            for month in year.months() {
                assert_eq!(
                    month.days().len() % usize::from(cal.weekday_count()),
                    0,
                    "{}-{} in window {start}..={end}",
                    year.year(),
                    month.month()
                );
            }
        }
    });
}

#[test]
fn range_type_agrees_with_window() {
    check_all(|_, start, end, years| {
        for (_, _, day) in walk_days(years) {
            let inside = start <= day.date() && day.date() <= end;
            match day.range_type() {
                RangeType::InsideRange(_) => assert!(inside, "{} should be inside", day.date()),
                RangeType::OutOfRange(_) => assert!(!inside, "{} should be outside", day.date()),
            }
        }
    });
}

#[test]
fn months_start_on_first_weekday() {
    check_all(|cal, _, _, years| {
        for year in years {
            for month in year.months() {
                let first = month.days().first().unwrap();
                assert_eq!(cal.weekday(first.date()), cal.first_weekday());
            }
        }
    });
}

#[test]
fn days_are_consecutive_within_a_month() {
    check_all(|_, _, _, years| {
        for year in years {
            for month in year.months() {
                for pair in month.days().windows(2) {
                    assert_eq!(pair[0].date().succ_opt(), Some(pair[1].date()));
                }
            }
        }
    });
}

#[test]
fn months_are_contiguous() {
    check_all(|_, _, _, years| {
        let keys: Vec<(i32, u32)> = years
            .iter()
            .flat_map(|y| y.months().iter().map(move |m| (y.year(), m.month())))
            .collect();
        for pair in keys.windows(2) {
            let expected = if pair[0].1 == 12 {
                (pair[0].0 + 1, 1)
            } else {
                (pair[0].0, pair[0].1 + 1)
            };
            assert_eq!(pair[1], expected);
        }
    });
}

#[test]
fn day_numbers_match_dates() {
    check_all(|cal, _, _, years| {
        for (_, _, day) in walk_days(years) {
            assert_eq!(day.day(), cal.day(day.date()));
        }
    });
}

#[test]
fn year_range_covers_twelve_months() {
    let cal = Gregorian::default();
    let years = build_for_range(&cal, date(2025, 6, 17), DrawRange::Year(1), &BuildOptions::new())
        .unwrap();
    let months: usize = years.iter().map(|y| y.months().len()).sum();
    assert_eq!(months, 12);
    assert_eq!(years[0].months()[0].month(), 6);
    assert_eq!(years.last().unwrap().months().last().unwrap().month(), 5);
}
