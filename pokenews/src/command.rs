//! Chat command surface
//!
//! Grammar: an optional leading `/`, the literal `pokenews`, then either
//! nothing (time query) or `reload`. Words are whitespace-separated and
//! case-sensitive.

use std::str::FromStr;

use crate::error::CommandError;
use crate::host::{CommandSource, RELOAD_PERMISSION_LEVEL};

/// Root literal of every command.
pub const COMMAND_ROOT: &str = "pokenews";

/// A parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// `pokenews`: report the time until the next event.
    Query,
    /// `pokenews reload`: re-read the configuration and restart the cycle.
    Reload,
}

impl ChatCommand {
    /// Minimum permission level needed to run this command.
    #[must_use]
    pub const fn required_permission(self) -> u8 {
        match self {
            Self::Query => 0,
            Self::Reload => RELOAD_PERMISSION_LEVEL,
        }
    }

    /// Canonical spelling, without the slash.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "pokenews",
            Self::Reload => "pokenews reload",
        }
    }

    /// Checks `source` against [`required_permission`](Self::required_permission).
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::PermissionDenied`] if the caller's level is
    /// too low.
    pub fn authorize(self, source: &CommandSource) -> Result<Self, CommandError> {
        let required = self.required_permission();
        if source.has_permission(required) {
            Ok(self)
        } else {
            Err(CommandError::PermissionDenied {
                caller: source.name.clone(),
                command: self.as_str().to_owned(),
                required,
            })
        }
    }
}

impl FromStr for ChatCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let mut words = body.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some(COMMAND_ROOT), None) => Self::Query,
            (Some(COMMAND_ROOT), Some("reload")) => Self::Reload,
            _ => return Err(CommandError::Unknown(trimmed.to_owned())),
        };
        if words.next().is_some() {
            return Err(CommandError::Unknown(trimmed.to_owned()));
        }
        Ok(command)
    }
}
