//! Render command: draw the calendar model as text.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info_span};

use monthgrid_calendar::CalendarSystem;
use monthgrid_grid::Axis;
use monthgrid_model::{RangeSelection, SingleSelection};

use crate::cli::RenderArgs;
use crate::convert;
use crate::model_cmd;
use crate::render::{Layout, Selection, TextRenderer, render_calendar};

/// Build the model and print it.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let built = model_cmd::build(&args.model, today)?;
    let layout = convert::build_layout(&built.config.layout)?;

    let include_blanks = args.include_blanks || built.config.layout.include_blanks;
    let mut renderer = TextRenderer::new(today)
        .with_include_blanks(include_blanks)
        .with_selection(selection(&args));
    if shows_weekday_header(&layout, built.calendar.weekday_count()) {
        renderer = renderer.with_weekday_header(layout.days.spacing);
    }

    let text = render_calendar(&built.years, &built.calendar, &renderer, &layout)
        .context("failed to lay out calendar")?
        .to_text();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{text}").context("failed to write to stdout")?;
    Ok(())
}

/// Applies the `--select` taps to a fresh selection.
fn selection(args: &RenderArgs) -> Selection {
    if args.single {
        let mut single = SingleSelection::new();
        for &date in &args.select {
            single.select(date);
        }
        return match single.selected() {
            Some(_) => Selection::Single(single),
            None => Selection::None,
        };
    }
    if args.select.is_empty() && args.select_end.is_none() {
        return Selection::None;
    }
    let mut range = RangeSelection::with_bounds(None, args.select_end);
    for &date in &args.select {
        range.tap(date);
    }
    debug!(state = ?range.state(), start = ?range.start(), end = ?range.end(), "selection");
    Selection::Range(range)
}

/// A weekday header lines up only when days run in weekday-wide rows.
fn shows_weekday_header(layout: &Layout, weekday_count: u8) -> bool {
    layout.days.axis == Axis::Vertical && layout.days.lanes == usize::from(weekday_count)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::cli::ModelArgs;
    use crate::render::LevelLayout;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn args(select: Vec<NaiveDate>, select_end: Option<NaiveDate>, single: bool) -> RenderArgs {
        RenderArgs {
            model: ModelArgs {
                config: None,
                start: None,
                range: None,
                first_weekday: None,
            },
            include_blanks: false,
            select,
            select_end,
            single,
            today: None,
        }
    }

    #[test]
    fn no_selection() {
        assert_eq!(selection(&args(vec![], None, false)), Selection::None);
        assert_eq!(selection(&args(vec![], None, true)), Selection::None);
    }

    #[test]
    fn taps_build_a_range() {
        let sel = selection(&args(vec![d(10), d(14)], None, false));
        assert_eq!(
            sel,
            Selection::Range(RangeSelection::with_bounds(Some(d(10)), Some(d(14))))
        );
    }

    #[test]
    fn preset_end_with_earlier_tap() {
        let sel = selection(&args(vec![d(3)], Some(d(9)), false));
        assert_eq!(
            sel,
            Selection::Range(RangeSelection::with_bounds(Some(d(3)), Some(d(9))))
        );
    }

    #[test]
    fn single_keeps_last_tap() {
        let sel = selection(&args(vec![d(3), d(9)], None, true));
        assert_eq!(sel, Selection::Single(SingleSelection::new().with_selected(d(9))));
    }

    #[test]
    fn header_only_for_weekday_rows() {
        let mut layout = Layout::default();
        assert!(shows_weekday_header(&layout, 7));
        layout.days = LevelLayout::new(7, Axis::Horizontal);
        assert!(!shows_weekday_header(&layout, 7));
        layout.days = LevelLayout::new(5, Axis::Vertical);
        assert!(!shows_weekday_header(&layout, 7));
    }
}
