//! Logging initialization for `PokeNews`.
//!
//! Logs go to stderr; stdout belongs to the console host, which prints
//! announcements there. `-v` raises the level of the `pokenews` crates
//! only: `-v` shows phase announcements and reloads, `-vv` adds the
//! per-second countdown heartbeat and queries. Dependencies stay at
//! `warn`. `POKENEWS_LOG_LEVEL` replaces the whole filter.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the `-v` count.
pub const LOG_LEVEL_ENV: &str = "POKENEWS_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the default filter: `warn` globally, `verbosity` for our crates.
#[must_use]
pub fn filter_directives(verbosity: u8) -> String {
    let level = verbosity_to_directive(verbosity);
    format!("warn,pokenews={level},pokenews_core={level}")
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)));

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
