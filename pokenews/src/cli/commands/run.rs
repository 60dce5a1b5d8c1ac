//! `run`: drive the countdown in real time on the console.

use std::path::Path;
use std::sync::Arc;

use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

use crate::cli::args::RunArgs;
use crate::config::ConfigStore;
use crate::error::PokeNewsError;
use crate::host::console::{self, ConsoleHost, ConsoleOptions};
use crate::host::CommandSource;
use crate::observability::{EventEmitter, init_metrics};
use crate::service::PokeNews;

/// Name shown for commands typed on stdin.
const CONSOLE_USER: &str = "Console";

/// Runs until `cancel` fires.
///
/// # Errors
///
/// Returns an I/O error if the metrics endpoint or events file cannot be
/// set up, or if reading stdin fails.
pub async fn run(
    config_path: &Path,
    args: &RunArgs,
    cancel: CancellationToken,
) -> Result<(), PokeNewsError> {
    init_metrics(args.metrics_port)?;
    if let Some(port) = args.metrics_port {
        tracing::info!(port, "Prometheus metrics endpoint started");
    }

    let store = Arc::new(ConfigStore::open(config_path));
    let snapshot = store.snapshot();
    tracing::info!(
        config = %config_path.display(),
        cycle_length = snapshot.cycle_length,
        allow_terminal_action = args.allow_terminal_action,
        "countdown started"
    );

    let events = match &args.events_file {
        Some(path) => EventEmitter::from_file(path)?,
        None => EventEmitter::stderr(),
    };
    let mut service = PokeNews::new(store, events);
    let mut host = ConsoleHost::stdout(ConsoleOptions {
        render: args.render,
        allow_terminal_action: args.allow_terminal_action,
    });
    let source = CommandSource::new(CONSOLE_USER, args.permission_level);

    console::run_loop(
        &mut service,
        &mut host,
        &source,
        BufReader::new(tokio::io::stdin()),
        cancel,
    )
    .await?;

    tracing::info!(
        elapsed_ticks = service.scheduler().elapsed_ticks(),
        "countdown stopped"
    );
    Ok(())
}
