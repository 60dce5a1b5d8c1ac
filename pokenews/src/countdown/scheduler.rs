//! Countdown scheduler
//!
//! Owns the elapsed-tick counter. [`CountdownScheduler::advance`] is called
//! once per host tick and reports which phase fired; it performs no I/O.
//! The caller delivers the announcement and runs the terminal action.

use std::sync::Arc;

use pokenews_core::config::{CountdownConfig, TICKS_PER_SECOND};

use super::phase::{Phase, QueryPhase};
use crate::config::ConfigStore;

/// Diagnostic record produced on whole-second ticks when `debug` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDiagnostic {
    /// Elapsed ticks at the time of the record.
    pub tick: i64,
    /// Remaining ticks (may be negative for a zero-length cycle).
    pub remaining: i64,
}

/// Report of a single [`CountdownScheduler::advance`] call.
#[derive(Debug, Clone)]
pub struct Tick {
    /// Elapsed ticks after the increment, before any cycle reset.
    pub elapsed_ticks: i64,
    /// `cycle_length - elapsed_ticks` for this tick.
    pub remaining: i64,
    /// Phase that fired, or [`Phase::Idle`].
    pub phase: Phase,
    /// Present only when `debug` is enabled and `remaining` is a whole
    /// number of seconds.
    pub diagnostic: Option<TickDiagnostic>,
    /// Configuration the tick was evaluated against.
    pub config: Arc<CountdownConfig>,
}

impl Tick {
    /// Message template for the fired phase, if any.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.phase.template(&self.config)
    }
}

/// Tick-driven countdown over a shared [`ConfigStore`].
#[derive(Debug)]
pub struct CountdownScheduler {
    config: Arc<ConfigStore>,
    elapsed_ticks: i64,
}

impl CountdownScheduler {
    /// Creates a scheduler at the start of a fresh cycle.
    #[must_use]
    pub const fn new(config: Arc<ConfigStore>) -> Self {
        Self {
            config,
            elapsed_ticks: 0,
        }
    }

    /// Ticks elapsed in the current cycle.
    #[must_use]
    pub const fn elapsed_ticks(&self) -> i64 {
        self.elapsed_ticks
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> Arc<CountdownConfig> {
        self.config.snapshot()
    }

    /// Advances by one tick and classifies the result.
    ///
    /// On [`Phase::Stolen`] the counter is reset to zero before returning,
    /// so the next call starts a new cycle.
    pub fn advance(&mut self) -> Tick {
        let config = self.config.snapshot();
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        let remaining = config.cycle_ticks() - self.elapsed_ticks;

        let diagnostic = (config.debug && remaining % i64::from(TICKS_PER_SECOND) == 0).then_some(
            TickDiagnostic {
                tick: self.elapsed_ticks,
                remaining,
            },
        );

        let phase = Phase::classify(remaining, &config);
        let elapsed_ticks = self.elapsed_ticks;
        if phase == Phase::Stolen {
            self.elapsed_ticks = 0;
        }

        Tick {
            elapsed_ticks,
            remaining,
            phase,
            diagnostic,
            config,
        }
    }

    /// Remaining ticks in the current cycle, never negative.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.remaining_under(&self.config.snapshot())
    }

    /// Remaining ticks measured against an already-taken snapshot.
    #[must_use]
    pub fn remaining_under(&self, config: &CountdownConfig) -> i64 {
        (config.cycle_ticks() - self.elapsed_ticks).max(0)
    }

    /// Grace/pending classification of `remaining` under the active config.
    #[must_use]
    pub fn query_phase(&self, remaining: i64) -> QueryPhase {
        QueryPhase::classify(remaining, &self.config.snapshot())
    }

    /// Installs `config` and starts a fresh cycle.
    pub fn reload(&mut self, config: CountdownConfig) -> Arc<CountdownConfig> {
        let active = self.config.replace(config);
        self.elapsed_ticks = 0;
        active
    }

    /// Re-reads the store's backing file and starts a fresh cycle.
    pub fn reload_from_store(&mut self) -> Arc<CountdownConfig> {
        let active = self.config.reload();
        self.elapsed_ticks = 0;
        active
    }
}
