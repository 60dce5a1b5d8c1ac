//! Structured diagnostic stream for `PokeNews`.
//!
//! Typed events serialized as newline-delimited JSON (JSONL) with a
//! monotonically increasing sequence number. The service only emits them
//! while `debug` is enabled in the active configuration.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::countdown::Phase;

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A discrete event in the life of the countdown.
///
/// Each variant is tagged with `"type"` when serialized to JSON so consumers
/// can dispatch on the event kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Whole-second heartbeat.
    CountdownTick {
        /// Wall-clock time of the tick.
        timestamp: DateTime<Utc>,
        /// Elapsed ticks in the current cycle.
        tick: i64,
        /// Ticks left until the event.
        remaining: i64,
    },

    /// A phase announcement was broadcast.
    PhaseFired {
        /// When the phase fired.
        timestamp: DateTime<Utc>,
        /// Phase that fired.
        phase: Phase,
        /// Remaining ticks at the time (the phase threshold).
        remaining: i64,
    },

    /// The terminal action was handed to the host.
    TerminalActionExecuted {
        /// When the action was requested.
        timestamp: DateTime<Utc>,
        /// Command string passed to the host.
        command: String,
    },

    /// Configuration was reloaded by a caller.
    ConfigReloaded {
        /// When the reload happened.
        timestamp: DateTime<Utc>,
        /// Name of the caller.
        caller: String,
        /// New cycle length in ticks.
        cycle_length: u32,
    },
}

// ---------------------------------------------------------------------------
// Envelope (adds sequence number via serde flatten)
// ---------------------------------------------------------------------------

/// Wraps an [`Event`] with a monotonically increasing sequence number.
#[derive(Debug, Serialize)]
struct EventEnvelope {
    /// Zero-based, monotonically increasing sequence counter.
    sequence: u64,
    /// The wrapped event (flattened into the same JSON object).
    #[serde(flatten)]
    event: Event,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Thread-safe, buffered JSONL event writer.
///
/// Each call to [`emit`](Self::emit) increments the sequence counter,
/// writes one JSON line, and flushes. Serialization or I/O failures are
/// dropped; diagnostics never stop the countdown.
pub struct EventEmitter {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
    sequence: AtomicU64,
}

// Box<dyn Write> is not Debug
impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("sequence", &self.sequence.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl EventEmitter {
    /// Creates an emitter that writes to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates an emitter that writes to stderr.
    ///
    /// Default for `run`: stdout carries the chat channel.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates an emitter that discards all events.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Box::new(std::io::sink()))
    }

    /// Creates an emitter that writes to a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or opened.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new(Box::new(file)))
    }

    /// Emits an event as a single JSONL line.
    pub fn emit(&self, event: Event) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let envelope = EventEnvelope {
            sequence: seq,
            event,
        };

        let Ok(line) = serde_json::to_string(&envelope) else {
            return;
        };
        let mut w = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(w, "{line}");
        let _ = w.flush();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
