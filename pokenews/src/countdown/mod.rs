//! Countdown state machine
//!
//! A cycle is `cycle_length` ticks long. Each host tick advances the
//! scheduler by one; the remaining-tick count then decides which phase,
//! if any, fires on that exact tick.
//!
//! # Architecture
//!
//! - [`Phase`] — announcement phases and their prioritized classification
//! - [`QueryPhase`] — grace/pending split used by on-demand queries
//! - [`CountdownScheduler`] — owns the tick counter and produces [`Tick`] reports

pub mod phase;
pub mod scheduler;

pub use phase::{Phase, QueryPhase};
pub use scheduler::{CountdownScheduler, Tick, TickDiagnostic};
