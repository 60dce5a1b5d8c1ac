//! Command-line interface
//!
//! - [`args`] — clap derive structs
//! - [`commands`] — handlers and dispatch

pub mod args;
pub mod commands;
