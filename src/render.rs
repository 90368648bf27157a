//! Text rendering of a calendar model.
//!
//! Each tree level is drawn by one [`CalendarRenderer`] method and the
//! rendered children are laid out through `monthgrid_grid::pack` with the
//! level's lane count and axis.

use chrono::NaiveDate;
use tracing::debug;

use monthgrid_calendar::CalendarSystem;
use monthgrid_grid::{Axis, GridError, LineExtents, Size, Slot, pack};
use monthgrid_model::{
    DayContext, Highlight, MonthContext, RangeSelection, SingleSelection, Year, YearContext,
};

/// A rectangle of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self { lines, width }
    }

    /// A single line of text.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    /// Whitespace of the given size.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            lines: vec![" ".repeat(width); height],
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn size(&self) -> Size {
        Size::new(self.width as f64, self.height() as f64)
    }

    /// Line `row` padded with spaces to `width`; blank past the last line.
    fn padded_line(&self, row: usize, width: usize) -> String {
        let line = self.lines.get(row).map(String::as_str).unwrap_or("");
        format!("{line:<width$}")
    }

    /// The block's lines joined with newlines, trailing spaces removed.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Grid parameters for one level of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLayout {
    pub lanes: usize,
    pub axis: Axis,
    /// Uniform cell size instead of per-line extents.
    pub lazy: bool,
    /// Blank columns or lines between cells.
    pub spacing: usize,
}

impl LevelLayout {
    pub fn new(lanes: usize, axis: Axis) -> Self {
        Self {
            lanes,
            axis,
            lazy: false,
            spacing: 0,
        }
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Layout of every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub days: LevelLayout,
    pub months: LevelLayout,
    pub years: LevelLayout,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            days: LevelLayout::new(7, Axis::Vertical),
            months: LevelLayout::new(3, Axis::Vertical).with_spacing(2),
            years: LevelLayout::new(1, Axis::Vertical).with_spacing(1),
        }
    }
}

/// Per-level drawing strategies. Children arrive already rendered and laid
/// out.
pub trait CalendarRenderer<C: ?Sized> {
    fn render_day(&self, day: DayContext<'_, C>) -> Block;
    fn render_month(&self, month: MonthContext<'_, C>, days: Block) -> Block;
    fn render_year(&self, year: YearContext<'_, C>, months: Block) -> Block;
}

/// Lays out `blocks` as a grid.
///
/// Packed levels size every line by its tallest (vertical) or widest
/// (horizontal) cell and every lane by its largest cell across lines. Lazy
/// levels give all cells the size of the largest one.
///
/// # Errors
///
/// Returns [`GridError::InvalidConfiguration`] for a level with zero lanes.
pub fn compose(blocks: &[Block], level: &LevelLayout) -> Result<Block, GridError> {
    let grid = pack(blocks, level.lanes, level.axis)?;
    let axis = level.axis;

    let mut line_extents = LineExtents::for_grid(&grid);
    let mut lane_extents = LineExtents::new(grid.lane_count());
    if level.lazy {
        let cell = blocks.iter().fold(Size::default(), |acc, b| {
            Size::new(acc.width.max(b.size().width), acc.height.max(b.size().height))
        });
        for line in 0..grid.line_count() {
            line_extents.record(axis, line, cell)?;
        }
        for lane in 0..grid.lane_count() {
            lane_extents.update(lane, cell.main_extent(axis))?;
        }
    } else {
        grid.measure(&mut line_extents, |_, block| block.size())?;
        for (index, block) in blocks.iter().enumerate() {
            lane_extents.update(grid.placement(index).lane, block.size().main_extent(axis))?;
        }
    }

    let (rows, columns) = match axis {
        Axis::Vertical => (&line_extents, &lane_extents),
        Axis::Horizontal => (&lane_extents, &line_extents),
    };
    let gap = " ".repeat(level.spacing);

    let mut lines = Vec::with_capacity(rows.total(level.spacing as f64) as usize);
    for (row, &height) in rows.as_slice().iter().enumerate() {
        if row > 0 {
            lines.extend(std::iter::repeat_n(String::new(), level.spacing));
        }
        for text_row in 0..height as usize {
            let mut text = String::new();
            for (column, &width) in columns.as_slice().iter().enumerate() {
                if column > 0 {
                    text.push_str(&gap);
                }
                let (line, lane) = match axis {
                    Axis::Vertical => (row, column),
                    Axis::Horizontal => (column, row),
                };
                let width = width as usize;
                match grid.slot(line, lane) {
                    Some(Slot::Item { item, .. }) => {
                        text.push_str(&item.padded_line(text_row, width));
                    }
                    Some(Slot::Placeholder) | None => text.push_str(&" ".repeat(width)),
                }
            }
            lines.push(text);
        }
    }
    Ok(Block::new(lines))
}

/// Renders `years` bottom-up: days into months, months into years, years
/// into one block.
///
/// # Errors
///
/// Propagates [`compose`] failures.
#[tracing::instrument(skip_all, fields(n_years = years.len()))]
pub fn render_calendar<C, R>(
    years: &[Year],
    calendar: &C,
    renderer: &R,
    layout: &Layout,
) -> Result<Block, GridError>
where
    C: CalendarSystem + ?Sized,
    R: CalendarRenderer<C> + ?Sized,
{
    let mut year_blocks = Vec::with_capacity(years.len());
    for year in years {
        let year_ctx = YearContext::new(year, calendar);
        let mut month_blocks = Vec::with_capacity(year.months().len());
        for month_ctx in year_ctx.months() {
            let day_blocks: Vec<Block> = month_ctx.days().map(|d| renderer.render_day(d)).collect();
            let days = compose(&day_blocks, &layout.days)?;
            month_blocks.push(renderer.render_month(month_ctx, days));
        }
        debug!(year = year.year(), n_months = month_blocks.len(), "year rendered");
        let months = compose(&month_blocks, &layout.months)?;
        year_blocks.push(renderer.render_year(year_ctx, months));
    }
    compose(&year_blocks, &layout.years)
}

/// Date picking state shown by [`TextRenderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Single(SingleSelection),
    Range(RangeSelection),
}

impl Selection {
    fn highlight(&self, date: NaiveDate) -> Highlight {
        match self {
            Selection::None => Highlight::None,
            Selection::Single(single) if single.is_selected(date) => Highlight::Start,
            Selection::Single(_) => Highlight::None,
            Selection::Range(range) => range.highlight(date),
        }
    }
}

/// Width of one day cell.
const DAY_WIDTH: usize = 4;

/// Plain-text renderer.
///
/// Day cells are four characters wide: `[12]` marks a selected bound, `-12-`
/// a day inside a selected range and `*12` today.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    today: NaiveDate,
    include_blanks: bool,
    selection: Selection,
    weekday_header: Option<usize>,
}

impl TextRenderer {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            include_blanks: false,
            selection: Selection::None,
            weekday_header: None,
        }
    }

    pub fn with_include_blanks(mut self, include_blanks: bool) -> Self {
        self.include_blanks = include_blanks;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Draws a weekday header above each month, aligned to day columns
    /// separated by `spacing`.
    pub fn with_weekday_header(mut self, spacing: usize) -> Self {
        self.weekday_header = Some(spacing);
        self
    }
}

impl<C> CalendarRenderer<C> for TextRenderer
where
    C: CalendarSystem + ?Sized,
{
    fn render_day(&self, ctx: DayContext<'_, C>) -> Block {
        let day = ctx.day();
        if !day.is_visible(self.include_blanks) {
            return Block::blank(DAY_WIDTH, 1);
        }
        let n = day.day();
        let text = match self.selection.highlight(day.date()) {
            Highlight::Start | Highlight::End => format!("[{n:>2}]"),
            Highlight::InRange => format!("-{n:>2}-"),
            Highlight::None if ctx.is_same_day(Some(self.today)) => format!("*{n:>2} "),
            Highlight::None => format!(" {n:>2} "),
        };
        Block::line(text)
    }

    fn render_month(&self, ctx: MonthContext<'_, C>, days: Block) -> Block {
        let width = days.width();
        let mut lines = vec![format!("{:^width$}", ctx.title())];
        if let Some(spacing) = self.weekday_header {
            let gap = " ".repeat(spacing);
            let header = ctx
                .calendar()
                .ordered_weekday_symbols()
                .into_iter()
                .map(|s| {
                    let short: String = s.chars().take(2).collect();
                    format!(" {short:>2} ")
                })
                .collect::<Vec<_>>()
                .join(&gap);
            lines.push(header);
        }
        lines.extend(days.lines().iter().cloned());
        Block::new(lines)
    }

    fn render_year(&self, ctx: YearContext<'_, C>, months: Block) -> Block {
        let width = months.width();
        let title = ctx.title();
        let mut lines = vec![
            format!("{title:^width$}"),
            format!("{:^width$}", "=".repeat(title.chars().count())),
        ];
        lines.extend(months.lines().iter().cloned());
        Block::new(lines)
    }
}
