//! `PokeNews` - recurring event countdown announcer
//!
//! Counts down a fixed-length cycle in server ticks, broadcasts styled
//! announcements at configured thresholds, answers "how long until the
//! event?" queries, and runs a terminal action when the cycle completes.
//!
//! The pure pieces (configuration schema and the `&`-markup compiler) live
//! in `pokenews-core`; this crate adds the scheduler, the host interface,
//! configuration persistence, observability, and the CLI.

pub mod cli;
pub mod command;
pub mod config;
pub mod countdown;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod observability;
pub mod service;

pub use pokenews_core::markup;
pub use service::PokeNews;
