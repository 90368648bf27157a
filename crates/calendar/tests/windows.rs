use chrono::{NaiveDate, Weekday};
use monthgrid_calendar::{
    CalendarError, CalendarSystem, DateUnit, DrawRange, Gregorian, resolve_window,
    snap_to_month_end, snap_to_month_start,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn one_month_from_february_non_leap() {
    let cal = Gregorian::default();
    let window = resolve_window(&cal, date(2025, 2, 1), DrawRange::Month(1)).unwrap();
    assert_eq!(window.start(), date(2025, 2, 1));
    assert_eq!(window.end(), date(2025, 2, 28));
    assert_eq!(window.day_count(), 28);
}

#[test]
fn windows_always_cover_whole_months() {
    let cal = Gregorian::new(Weekday::Mon);
    let anchors = [date(2023, 1, 31), date(2024, 2, 29), date(2024, 7, 4), date(2025, 12, 31)];
    let ranges = [
        DrawRange::Day(1),
        DrawRange::Day(45),
        DrawRange::Month(1),
        DrawRange::Month(7),
        DrawRange::Year(2),
    ];
    for anchor in anchors {
        for range in ranges {
            let window = resolve_window(&cal, anchor, range).unwrap();
            assert_eq!(cal.day(window.start()), 1, "{anchor} {range}");
            assert_eq!(
                snap_to_month_end(&cal, window.end()).unwrap(),
                window.end(),
                "{anchor} {range}"
            );
            assert!(window.start() <= anchor, "{anchor} {range}");
        }
    }
}

#[test]
fn year_range_spans_twelve_months() {
    let cal = Gregorian::default();
    let window = resolve_window(&cal, date(2024, 6, 15), DrawRange::Year(1)).unwrap();
    assert_eq!(window.start(), date(2024, 6, 1));
    assert_eq!(window.end(), date(2025, 5, 31));
}

#[test]
fn snapping_is_idempotent() {
    let cal = Gregorian::default();
    let start = snap_to_month_start(&cal, date(2025, 8, 19)).unwrap();
    assert_eq!(snap_to_month_start(&cal, start).unwrap(), start);
    let end = snap_to_month_end(&cal, date(2025, 8, 19)).unwrap();
    assert_eq!(snap_to_month_end(&cal, end).unwrap(), end);
}

#[test]
fn window_near_max_date_overflows() {
    let cal = Gregorian::default();
    let err = resolve_window(&cal, NaiveDate::MAX, DrawRange::Month(1)).unwrap_err();
    assert!(matches!(
        err,
        CalendarError::ArithmeticOverflow {
            unit: DateUnit::Month,
            ..
        }
    ));
}

#[test]
fn zero_range_is_rejected() {
    let cal = Gregorian::default();
    assert_eq!(
        resolve_window(&cal, date(2025, 1, 1), DrawRange::Year(0)).unwrap_err(),
        CalendarError::EmptyDrawRange {
            unit: DateUnit::Year
        }
    );
}
