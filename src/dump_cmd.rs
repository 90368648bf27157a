//! Dump command: one line per day cell of the model.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info_span;

use monthgrid_model::{DateClass, Day, RangeType, Year, walk_days};

use crate::cli::DumpArgs;
use crate::model_cmd;

/// Build the model and print its day cells.
pub fn run(args: DumpArgs) -> Result<()> {
    let _cmd = info_span!("dump").entered();
    let built = model_cmd::build(&args.model, Local::now().date_naive())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in dump_lines(&built.years) {
        writeln!(out, "{line}").context("failed to write to stdout")?;
    }
    Ok(())
}

/// `<date>  <year>-<month>  <range type>` for every cell in drawing order.
pub fn dump_lines(years: &[Year]) -> impl Iterator<Item = String> + '_ {
    walk_days(years).map(|(year, month, day)| {
        format!(
            "{}  {}-{:02}  {}",
            day.date(),
            year.year(),
            month.month(),
            describe(day)
        )
    })
}

fn describe(day: &Day) -> String {
    let (range, class) = match day.range_type() {
        RangeType::InsideRange(class) => ("inside", class),
        RangeType::OutOfRange(class) => ("outside", class),
    };
    let class = match class {
        DateClass::PreviousMonth => "previous",
        DateClass::CurrentMonth => "current",
        DateClass::NextMonth => "next",
    };
    format!("{range}/{class}")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use monthgrid_calendar::Gregorian;
    use monthgrid_model::build_model;

    use super::*;

    #[test]
    fn dump_january_2025() {
        let cal = Gregorian::new(Weekday::Mon);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let years = build_model(&cal, start, end).unwrap();
        let lines: Vec<_> = dump_lines(&years).collect();

        assert_eq!(lines.len(), 35);
        assert_eq!(lines[0], "2024-12-30  2025-01  outside/previous");
        assert_eq!(lines[2], "2025-01-01  2025-01  inside/current");
        assert_eq!(lines[34], "2025-02-02  2025-01  outside/next");
    }
}
