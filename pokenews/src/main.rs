//! `PokeNews` — recurring event countdown announcer

use clap::Parser;
use tokio_util::sync::CancellationToken;

use pokenews::cli::args::Cli;
use pokenews::cli::commands;
use pokenews::error::ExitCode;
use pokenews::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();

    // Spawn signal handler for graceful shutdown
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => Some(sigterm),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to register SIGTERM handler");
                    None
                }
            };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            Some(()) = recv(sigterm.as_mut()) => {}
        }

        eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
        shutdown.cancel();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
            Some(()) = recv(sigterm.as_mut()) => std::process::exit(ExitCode::TERMINATED),
        }
    });

    let result = commands::dispatch(cli, cancel).await;

    match result {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Waits for the next signal, or forever if the handler is unavailable.
async fn recv(signal: Option<&mut tokio::signal::unix::Signal>) -> Option<()> {
    match signal {
        Some(signal) => signal.recv().await,
        None => std::future::pending().await,
    }
}
