//! Model construction shared by the commands: config loading, CLI overrides
//! and the build itself.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use monthgrid_calendar::Gregorian;
use monthgrid_model::{Year, build_for_range};

use crate::cli::ModelArgs;
use crate::config::{self, MonthgridConfig};
use crate::convert;

/// A built model with the calendar and configuration that produced it.
pub struct BuiltModel {
    pub config: MonthgridConfig,
    pub calendar: Gregorian,
    pub years: Vec<Year>,
}

/// Loads the configuration, applies CLI overrides and builds the model.
///
/// `today` is the anchor when neither `--start` nor `[range].start` is set.
pub fn build(args: &ModelArgs, today: NaiveDate) -> Result<BuiltModel> {
    let mut config = config::load(args.config.as_deref())?;
    if let Some(ref first) = args.first_weekday {
        config.calendar.first_weekday = first.clone();
    }

    let calendar = convert::build_calendar(&config.calendar)?;
    let options = convert::build_options(&config.build)?;
    let anchor = match (args.start, config.range.start.as_deref()) {
        (Some(start), _) => start,
        (None, Some(start)) => convert::parse_date(start).context("invalid [range].start")?,
        (None, None) => today,
    };
    let range = match args.range {
        Some(ref r) => convert::parse_draw_range(r).context("invalid --range")?,
        None => convert::parse_draw_range(&config.range.draw).context("invalid [range].draw")?,
    };

    info!(%anchor, %range, first_weekday = %config.calendar.first_weekday, "building model");
    let years = build_for_range(&calendar, anchor, range, &options)
        .with_context(|| format!("failed to build calendar model for {range} from {anchor}"))?;
    info!(
        n_years = years.len(),
        n_months = years.iter().map(|y| y.months().len()).sum::<usize>(),
        "model built"
    );

    Ok(BuiltModel {
        config,
        calendar,
        years,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(config: Option<std::path::PathBuf>) -> ModelArgs {
        ModelArgs {
            config,
            start: None,
            range: None,
            first_weekday: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn config_values_drive_the_build() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[calendar]\nfirst_weekday = \"monday\"\n[range]\nstart = \"2025-01-20\"\ndraw = \"2m\""
        )
        .unwrap();
        let built = build(&args(Some(file.path().to_path_buf())), date(2000, 1, 1)).unwrap();
        assert_eq!(built.years.len(), 1);
        let months: Vec<_> = built.years[0].months().iter().map(|m| m.month()).collect();
        assert_eq!(months, [1, 2]);
        assert_eq!(built.years[0].months()[0].days()[0].date(), date(2024, 12, 30));
    }

    #[test]
    fn cli_overrides_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[range]\nstart = \"2025-01-20\"\ndraw = \"2m\"").unwrap();
        let mut model_args = args(Some(file.path().to_path_buf()));
        model_args.start = Some(date(2025, 6, 3));
        model_args.range = Some("1m".into());
        model_args.first_weekday = Some("monday".into());

        let built = build(&model_args, date(2000, 1, 1)).unwrap();
        assert_eq!(built.years[0].months().len(), 1);
        assert_eq!(built.years[0].months()[0].month(), 6);
        assert_eq!(built.config.calendar.first_weekday, "monday");
    }

    #[test]
    fn invalid_range_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[range]\ndraw = \"soon\"").unwrap();
        let err = build(&args(Some(path)), date(2025, 1, 1)).err().unwrap();
        assert!(format!("{err:#}").contains("invalid [range].draw"));
    }
}
