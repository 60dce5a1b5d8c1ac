//! Version information display

use pokenews_core::config::{TICKS_PER_SECOND, TIME_PLACEHOLDER};

use crate::cli::args::{OutputFormat, VersionArgs};

/// Print version information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version}");
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "ticks_per_second": TICKS_PER_SECOND,
                "time_placeholder": TIME_PLACEHOLDER,
            });
            println!("{info}");
        }
    }
}
