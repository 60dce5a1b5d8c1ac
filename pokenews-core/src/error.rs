//! Core error types for `PokeNews`
//!
//! Configuration error types shared across the workspace. Markup
//! compilation is total and has no error type.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and persistence errors.
///
/// None of these are fatal: the store recovers from every variant by
/// falling back to defaults or keeping the in-memory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be written back to disk
    #[error("failed to persist {path}: {message}")]
    Persist {
        /// Path to the configuration file
        path: PathBuf,
        /// Description of the write failure
        message: String,
    },
}

impl ConfigError {
    /// Builds a [`ConfigError::Parse`] from a `serde_json` error.
    #[must_use]
    pub fn from_json(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        let line = err.line();
        Self::Parse {
            path: path.into(),
            line: (line > 0).then_some(line),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_line() {
        let err = ConfigError::Parse {
            path: PathBuf::from("config/pokenews_config.json"),
            line: Some(7),
            message: "expected `,`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pokenews_config.json (line 7)"));
        assert!(msg.contains("expected `,`"));
    }

    #[test]
    fn parse_error_display_without_line() {
        let err = ConfigError::Parse {
            path: PathBuf::from("a.json"),
            line: None,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in a.json: boom");
    }

    #[test]
    fn from_json_captures_line() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n\"a\": }").unwrap_err();
        let err = ConfigError::from_json("x.json", &json_err);
        match err {
            ConfigError::Parse { line, .. } => assert_eq!(line, Some(2)),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn persist_error_display() {
        let err = ConfigError::Persist {
            path: PathBuf::from("/readonly/c.json"),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/readonly/c.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
