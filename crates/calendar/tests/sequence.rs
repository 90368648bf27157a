use chrono::NaiveDate;
use monthgrid_calendar::{Gregorian, day_count_inclusive, day_sequence, is_first_day_of_month};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn month_boundaries_in_leap_year() {
    let cal = Gregorian::default();
    let dates: Vec<_> = day_sequence(&cal, date(2024, 1, 1), date(2024, 12, 31)).collect();

    let firsts: Vec<_> = dates
        .iter()
        .enumerate()
        .filter(|(_, d)| is_first_day_of_month(&cal, **d))
        .map(|(i, _)| i)
        .collect();
    // Cumulative month lengths of a leap year.
    assert_eq!(
        firsts,
        vec![0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335]
    );
}

#[test]
fn length_matches_inclusive_count() {
    let cal = Gregorian::default();
    let start = date(2023, 11, 15);
    for end in [date(2023, 11, 15), date(2023, 12, 31), date(2025, 3, 1)] {
        let n = day_sequence(&cal, start, end).count() as i64;
        assert_eq!(n, day_count_inclusive(start, end), "end {end}");
    }
}
