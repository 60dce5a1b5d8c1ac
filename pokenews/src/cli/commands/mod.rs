//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod config;
pub mod render;
pub mod run;
pub mod simulate;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands, ConfigSubcommand};
use crate::error::PokeNewsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `cancel` is fired by the process signal handler; only `run` waits on it.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), PokeNewsError> {
    match cli.command {
        Commands::Run(args) => run::run(&cli.config, &args, cancel).await,
        Commands::Simulate(args) => simulate::run(&cli.config, &args),
        Commands::Render(args) => {
            render::run(&args);
            Ok(())
        }
        Commands::Config(cmd) => match cmd.subcommand {
            ConfigSubcommand::Init(args) => config::init(&cli.config, &args),
            ConfigSubcommand::Show => config::show(&cli.config),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
