//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Weekday};

use monthgrid_calendar::{DrawRange, Gregorian};
use monthgrid_grid::Axis;
use monthgrid_model::{BuildOptions, OverflowPolicy, ReversedRange};

use crate::config::{BuildToml, CalendarToml, LayoutToml, LevelToml};
use crate::render::{Layout, LevelLayout};

/// Parses a weekday name (full or three-letter) or a 1-based index with
/// Sunday = 1 into a [`Weekday`].
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    if let Ok(index) = s.trim().parse::<u8>() {
        let calendar = Gregorian::from_first_weekday_index(index)?;
        return Ok(calendar.first_weekday_day());
    }
    match s.trim().to_lowercase().as_str() {
        "sunday" | "sun" => Ok(Weekday::Sun),
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        other => bail!("unknown weekday: {other:?}"),
    }
}

/// Parses a layout axis name into the corresponding enum variant.
pub fn parse_axis(s: &str) -> Result<Axis> {
    match s.trim().to_lowercase().as_str() {
        "vertical" => Ok(Axis::Vertical),
        "horizontal" => Ok(Axis::Horizontal),
        other => bail!("unknown axis: {other:?}"),
    }
}

/// Parses a draw range such as `"12d"`, `"3m"` or `"1y"`.
pub fn parse_draw_range(s: &str) -> Result<DrawRange> {
    let range: DrawRange = s.parse()?;
    if range.count() == 0 {
        bail!("draw range must cover at least one {}, got {s:?}", range.unit());
    }
    Ok(range)
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))
}

pub fn parse_reversed_range(s: &str) -> Result<ReversedRange> {
    match s.trim().to_lowercase().as_str() {
        "reject" => Ok(ReversedRange::Reject),
        "single-day" | "single_day" => Ok(ReversedRange::SingleDay),
        other => bail!("unknown reversed range policy: {other:?}"),
    }
}

pub fn parse_overflow(s: &str) -> Result<OverflowPolicy> {
    match s.trim().to_lowercase().as_str() {
        "truncate" => Ok(OverflowPolicy::Truncate),
        "fail" => Ok(OverflowPolicy::Fail),
        other => bail!("unknown overflow policy: {other:?}"),
    }
}

/// Builds a [`Gregorian`] calendar from the TOML calendar section.
pub fn build_calendar(cal: &CalendarToml) -> Result<Gregorian> {
    let mut calendar = Gregorian::new(parse_weekday(&cal.first_weekday)?);
    if let Some(ref symbols) = cal.month_symbols {
        calendar = calendar
            .with_month_symbols(symbols.clone())
            .context("invalid [calendar].month_symbols")?;
    }
    if let Some(ref symbols) = cal.weekday_symbols {
        calendar = calendar
            .with_weekday_symbols(symbols.clone())
            .context("invalid [calendar].weekday_symbols")?;
    }
    Ok(calendar)
}

/// Builds [`BuildOptions`] from the TOML build section.
pub fn build_options(build: &BuildToml) -> Result<BuildOptions> {
    Ok(BuildOptions::new()
        .with_reversed_range(parse_reversed_range(&build.reversed_range)?)
        .with_overflow(parse_overflow(&build.overflow)?))
}

fn build_level(name: &str, level: &LevelToml) -> Result<LevelLayout> {
    if level.lanes == 0 {
        bail!("[layout.{name}].lanes must be >= 1, got 0");
    }
    let axis = parse_axis(&level.axis).with_context(|| format!("invalid [layout.{name}].axis"))?;
    Ok(LevelLayout::new(level.lanes, axis)
        .with_lazy(level.lazy)
        .with_spacing(level.spacing))
}

/// Builds the render [`Layout`] from the TOML layout section.
pub fn build_layout(layout: &LayoutToml) -> Result<Layout> {
    Ok(Layout {
        days: build_level("days", &layout.days)?,
        months: build_level("months", &layout.months)?,
        years: build_level("years", &layout.years)?,
    })
}
