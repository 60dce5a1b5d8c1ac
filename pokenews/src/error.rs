//! Error types for `PokeNews`
//!
//! The countdown core never fails; these errors cover the process around
//! it: configuration I/O, chat command parsing, and CLI exit codes.

use thiserror::Error;

pub use pokenews_core::error::ConfigError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `PokeNews` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unreadable or unwritable file)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (stdin closed, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `PokeNews` operations.
#[derive(Debug, Error)]
pub enum PokeNewsError {
    /// Configuration loading or persistence error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid command-line usage
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PokeNewsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Command Errors
// ============================================================================

/// Failures of the chat command surface.
///
/// These are reported back to the caller; they never stop the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input is not a recognized command
    #[error("unknown or incomplete command: {0}")]
    Unknown(String),

    /// Caller lacks the permission level required by the command
    #[error("{caller} is not allowed to run '{command}' (requires permission level {required})")]
    PermissionDenied {
        /// Name of the calling user
        caller: String,
        /// Command that was refused
        command: String,
        /// Minimum permission level
        required: u8,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `PokeNews` operations.
pub type Result<T> = std::result::Result<T, PokeNewsError>;
