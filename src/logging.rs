use tracing_subscriber::EnvFilter;

/// Binary crate name; the library crates share it as a prefix.
const BIN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Library crates logging under `<bin>_<suffix>`.
const LIBRARY_SUFFIXES: &[&str] = &["calendar", "grid", "model"];

/// Maps the `-v` count to a level: warn, info, debug, then trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directive list enabling `level` for the binary and every library crate.
fn default_filter(level: &str) -> String {
    std::iter::once(BIN_TARGET.to_string())
        .chain(
            LIBRARY_SUFFIXES
                .iter()
                .map(|suffix| format!("{BIN_TARGET}_{suffix}")),
        )
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// Logs go to stderr so rendered calendars on stdout stay clean.
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
