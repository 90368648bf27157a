use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "monthgrid.toml";

/// Top-level monthgrid configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthgridConfig {
    /// Weekday layout and symbols.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Window to draw.
    #[serde(default)]
    pub range: RangeToml,

    /// Model construction policies.
    #[serde(default)]
    pub build: BuildToml,

    /// Grid layout per level.
    #[serde(default)]
    pub layout: LayoutToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,
    #[serde(default)]
    pub month_symbols: Option<Vec<String>>,
    #[serde(default)]
    pub weekday_symbols: Option<Vec<String>>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            first_weekday: default_first_weekday(),
            month_symbols: None,
            weekday_symbols: None,
        }
    }
}

fn default_first_weekday() -> String {
    "sunday".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    /// ISO date; today when unset.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default = "default_draw")]
    pub draw: String,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: None,
            draw: default_draw(),
        }
    }
}

fn default_draw() -> String {
    "1y".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildToml {
    #[serde(default = "default_reversed_range")]
    pub reversed_range: String,
    #[serde(default = "default_overflow")]
    pub overflow: String,
}

impl Default for BuildToml {
    fn default() -> Self {
        Self {
            reversed_range: default_reversed_range(),
            overflow: default_overflow(),
        }
    }
}

fn default_reversed_range() -> String {
    "reject".to_string()
}
fn default_overflow() -> String {
    "truncate".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    #[serde(default)]
    pub include_blanks: bool,
    #[serde(default = "default_days_level")]
    pub days: LevelToml,
    #[serde(default = "default_months_level")]
    pub months: LevelToml,
    #[serde(default = "default_years_level")]
    pub years: LevelToml,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            include_blanks: false,
            days: default_days_level(),
            months: default_months_level(),
            years: default_years_level(),
        }
    }
}

/// Grid parameters of one level (days in a month, months in a year, years).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelToml {
    pub lanes: usize,
    #[serde(default = "default_axis")]
    pub axis: String,
    #[serde(default)]
    pub lazy: bool,
    #[serde(default)]
    pub spacing: usize,
}

fn default_axis() -> String {
    "vertical".to_string()
}

fn default_days_level() -> LevelToml {
    LevelToml {
        lanes: 7,
        axis: default_axis(),
        lazy: false,
        spacing: 0,
    }
}
fn default_months_level() -> LevelToml {
    LevelToml {
        lanes: 3,
        axis: default_axis(),
        lazy: false,
        spacing: 2,
    }
}
fn default_years_level() -> LevelToml {
    LevelToml {
        lanes: 1,
        axis: default_axis(),
        lazy: false,
        spacing: 1,
    }
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is read
/// when present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<MonthgridConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                return Ok(MonthgridConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config TOML: {}", path.display()))
}
