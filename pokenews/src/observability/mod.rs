//! Observability
//!
//! Logging, metrics, and the debug event stream. Logs and events go to
//! stderr (or a file); stdout is reserved for chat output.

pub mod events;
pub mod logging;
pub mod metrics;

pub use events::{Event, EventEmitter};
pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
