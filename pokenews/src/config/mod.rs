//! Configuration module
//!
//! The schema lives in `pokenews-core`; this module adds the file-backed
//! [`ConfigStore`] that the scheduler and dispatcher share.

pub mod store;

pub use pokenews_core::config::*;
pub use store::{ConfigStore, DEFAULT_CONFIG_PATH, load_or_init, read_config, save_config};
