//! Countdown configuration schema.

pub mod schema;

pub use schema::*;
