//! Configuration store
//!
//! Owns the active [`CountdownConfig`] and its file on disk. The file is
//! pretty-printed JSON. A missing or unparsable file is replaced with
//! defaults; write failures are logged and the in-memory copy stays
//! authoritative. Nothing here is fatal.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::error::ConfigError;
use pokenews_core::config::CountdownConfig;

/// Default location of the configuration file, relative to the working
/// directory of the host.
pub const DEFAULT_CONFIG_PATH: &str = "config/pokenews_config.json";

// ============================================================================
// File I/O
// ============================================================================

/// Reads and parses the configuration file.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if its content is not a valid configuration.
pub fn read_config(path: &Path) -> Result<Option<CountdownConfig>, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ConfigError::from_json(path, &e))
}

/// Writes the configuration as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Persist`] if the directory or file cannot be
/// written.
pub fn save_config(path: &Path, config: &CountdownConfig) -> Result<(), ConfigError> {
    let persist_err = |message: String| ConfigError::Persist {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| persist_err(e.to_string()))?;
    }

    let mut text = serde_json::to_string_pretty(config).map_err(|e| persist_err(e.to_string()))?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| persist_err(e.to_string()))
}

/// Loads the configuration, falling back to defaults.
///
/// - missing file: defaults are written to `path`
/// - unreadable or unparsable file: the error is logged, defaults are
///   written back over it
/// - write failure: logged; the returned defaults are still used
pub fn load_or_init(path: &Path) -> CountdownConfig {
    match read_config(path) {
        Ok(Some(config)) => {
            debug!(path = %path.display(), "configuration loaded");
            config
        }
        Ok(None) => {
            info!(path = %path.display(), "configuration file not found; writing defaults");
            persist_defaults(path)
        }
        Err(err) => {
            warn!(error = %err, "configuration unreadable; restoring defaults");
            persist_defaults(path)
        }
    }
}

fn persist_defaults(path: &Path) -> CountdownConfig {
    let defaults = CountdownConfig::default();
    if let Err(err) = save_config(path, &defaults) {
        warn!(error = %err, "could not persist default configuration");
    }
    defaults
}

// ============================================================================
// Store
// ============================================================================

/// Holder of the single active configuration.
///
/// Readers take an `Arc` snapshot; reloads swap the whole `Arc`, so a
/// reader never observes a mix of old and new fields.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<CountdownConfig>>,
}

impl ConfigStore {
    /// Opens the store backed by the file at `path`, creating it with
    /// defaults if needed.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = load_or_init(&path);
        Self {
            path: Some(path),
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Creates a store with no backing file.
    ///
    /// [`reload`](Self::reload) keeps the current configuration.
    #[must_use]
    pub fn in_memory(config: CountdownConfig) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CountdownConfig> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-reads the backing file and makes it the active configuration.
    ///
    /// Only the countdown scheduler swaps configurations, so the cycle is
    /// always restarted alongside.
    pub(crate) fn reload(&self) -> Arc<CountdownConfig> {
        match &self.path {
            Some(path) => self.replace(load_or_init(path)),
            None => self.snapshot(),
        }
    }

    /// Makes `config` the active configuration.
    pub(crate) fn replace(&self, config: CountdownConfig) -> Arc<CountdownConfig> {
        let next = Arc::new(config);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);
        next
    }
}
