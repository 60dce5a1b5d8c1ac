//! Host interface
//!
//! The countdown never talks to users directly. Everything that leaves the
//! process goes through a [`Host`]: chat broadcasts, per-user feedback, and
//! the terminal action run when a cycle completes.

pub mod console;
pub mod recording;
pub mod render;

use std::fmt;

use pokenews_core::markup::StyledText;

pub use console::{ConsoleHost, ConsoleOptions};
pub use recording::{Delivery, RecordingHost};
pub use render::RenderMode;

/// Permission level at which a caller may run `pokenews reload`.
pub const RELOAD_PERMISSION_LEVEL: u8 = 4;

/// Identity of whoever issued a chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSource {
    /// Display name of the caller.
    pub name: String,
    /// Operator level, 0 (regular user) through 4 (server owner).
    pub permission_level: u8,
}

impl CommandSource {
    /// Creates a command source.
    #[must_use]
    pub fn new(name: impl Into<String>, permission_level: u8) -> Self {
        Self {
            name: name.into(),
            permission_level,
        }
    }

    /// Source with full privileges, used for the server console.
    #[must_use]
    pub fn console() -> Self {
        Self::new("Server", RELOAD_PERMISSION_LEVEL)
    }

    /// Returns `true` if this caller meets `required`.
    #[must_use]
    pub const fn has_permission(&self, required: u8) -> bool {
        self.permission_level >= required
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Channels the countdown delivers through.
///
/// Implementations must not block: every method is called from the tick
/// loop.
pub trait Host {
    /// Delivers `text` to every connected user.
    fn broadcast(&mut self, text: &StyledText);

    /// Delivers `text` to the single user behind `source`.
    fn send_feedback(&mut self, source: &CommandSource, text: &StyledText);

    /// Runs `command` with elevated privilege.
    fn execute_command(&mut self, command: &str);
}
