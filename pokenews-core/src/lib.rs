//! `PokeNews` Core — configuration schema and markup compiler
//!
//! This crate holds the I/O-free pieces shared by the `pokenews` service:
//! the countdown configuration document, its error type, and the compiler
//! that turns `&`-style chat markup into styled text runs.

pub mod config;
pub mod error;
pub mod markup;
