//! `simulate`: run ticks as fast as possible against a recording host.
//!
//! Output is one line per delivery, `<tick>\t<message>`. Feedback lines
//! carry `[@name]`, terminal actions are shown as `$ <command>`.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::cli::args::SimulateArgs;
use crate::config::ConfigStore;
use crate::error::PokeNewsError;
use crate::host::{CommandSource, Delivery, RecordingHost, RenderMode};
use crate::observability::EventEmitter;
use crate::service::PokeNews;

/// Runs `args.ticks` ticks and prints every delivery.
///
/// # Errors
///
/// Returns an I/O error if the events file cannot be created or stdout
/// cannot be written.
pub fn run(config_path: &Path, args: &SimulateArgs) -> Result<(), PokeNewsError> {
    let store = Arc::new(ConfigStore::open(config_path));
    let events = match &args.events_file {
        Some(path) => EventEmitter::from_file(path)?,
        None => EventEmitter::noop(),
    };
    let mut service = PokeNews::new(store, events);
    let mut host = RecordingHost::new();
    let source = CommandSource::console();
    let mut out = std::io::stdout().lock();

    tracing::debug!(ticks = args.ticks, "simulation started");
    for tick in 0..=args.ticks {
        if tick > 0 {
            service.tick(&mut host);
        }
        if args.query_at.contains(&tick) {
            service.query(&mut host, &source);
        }
        for delivery in host.take() {
            writeln!(out, "{}", format_delivery(tick, &delivery, args.render))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Formats one delivery as a tab-separated output line.
#[must_use]
pub fn format_delivery(tick: u64, delivery: &Delivery, mode: RenderMode) -> String {
    match delivery {
        Delivery::Broadcast(text) => format!("{tick}\t{}", mode.render(text)),
        Delivery::Feedback { to, text } => format!("{tick}\t[@{to}] {}", mode.render(text)),
        Delivery::Command(command) => format!("{tick}\t$ {command}"),
    }
}
