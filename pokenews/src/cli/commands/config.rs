//! `config init` and `config show`.

use std::path::Path;

use crate::cli::args::ConfigInitArgs;
use crate::config::{CountdownConfig, read_config, save_config};
use crate::error::PokeNewsError;

/// Writes the default configuration to `path`.
///
/// # Errors
///
/// Returns a usage error if the file exists and `--force` was not given,
/// or a config error if it cannot be written.
pub fn init(path: &Path, args: &ConfigInitArgs) -> Result<(), PokeNewsError> {
    if path.exists() && !args.force {
        return Err(PokeNewsError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_config(path, &CountdownConfig::default())?;
    tracing::info!(path = %path.display(), "default configuration written");
    println!("{}", path.display());
    Ok(())
}

/// Prints the configuration that `run` would use, without writing it.
///
/// # Errors
///
/// Returns a config error if the file exists but cannot be read or parsed.
pub fn show(path: &Path) -> Result<(), PokeNewsError> {
    let config = read_config(path)?.unwrap_or_else(|| {
        tracing::info!(path = %path.display(), "configuration file not found; showing defaults");
        CountdownConfig::default()
    });
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
