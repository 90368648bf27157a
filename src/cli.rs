use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Month-grid calendar builder.
#[derive(Parser)]
#[command(
    name = "monthgrid",
    version,
    about = "Build and render month-grid calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the calendar as text.
    Render(RenderArgs),
    /// Print every day cell of the model with its classification.
    Dump(DumpArgs),
}

/// Options shared by every command that builds a model.
#[derive(clap::Args)]
pub struct ModelArgs {
    /// Path to TOML configuration file (default: monthgrid.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Anchor date (YYYY-MM-DD); overrides [range].start.
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Draw range such as 12d, 3m or 1y; overrides [range].draw.
    #[arg(short, long)]
    pub range: Option<String>,

    /// First weekday name or index (Sunday = 1); overrides [calendar].first_weekday.
    #[arg(long = "first-weekday")]
    pub first_weekday: Option<String>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Draw placeholder days from neighbouring months.
    #[arg(long = "include-blanks")]
    pub include_blanks: bool,

    /// Tap a date; repeat to build a range (later taps follow range rules).
    #[arg(long)]
    pub select: Vec<NaiveDate>,

    /// Preset the end of the selected range before applying taps.
    #[arg(long = "select-end")]
    pub select_end: Option<NaiveDate>,

    /// Treat the selection as a single date (last tap wins).
    #[arg(long, conflicts_with = "select_end")]
    pub single: bool,

    /// Date marked as today (default: the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `dump` subcommand.
#[derive(clap::Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}
