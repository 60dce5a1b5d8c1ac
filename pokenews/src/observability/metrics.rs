//! Metrics collection for `PokeNews`.
//!
//! Prometheus-compatible counters and gauges. Every label value comes from
//! a closed enum, so no cardinality guard is needed.

use std::sync::atomic::{AtomicBool, Ordering};

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::countdown::{Phase, QueryPhase};
use crate::error::{CommandError, PokeNewsError};

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initializes the global metrics recorder.
///
/// When `port` is `Some`, a Prometheus HTTP listener is started on
/// `127.0.0.1:<port>`. When `None`, the recorder is installed without
/// an HTTP endpoint.
///
/// # Errors
///
/// Returns `PokeNewsError::Io` if the recorder or HTTP listener
/// cannot be installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), PokeNewsError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| PokeNewsError::Io(std::io::Error::other(e.to_string())))?;

    describe_metrics();
    Ok(())
}

/// Registers metric descriptions with the global recorder.
fn describe_metrics() {
    describe_counter!("pokenews_ticks_total", "Total number of countdown ticks");
    describe_counter!(
        "pokenews_announcements_total",
        "Phase announcements broadcast, by phase"
    );
    describe_counter!(
        "pokenews_queries_total",
        "Time queries answered, by query phase"
    );
    describe_counter!("pokenews_reloads_total", "Configuration reloads");
    describe_counter!(
        "pokenews_terminal_actions_total",
        "Terminal actions handed to the host"
    );
    describe_counter!(
        "pokenews_command_errors_total",
        "Rejected chat commands, by kind"
    );
    describe_gauge!(
        "pokenews_remaining_ticks",
        "Ticks left in the current cycle"
    );
}

/// Records one scheduler tick.
pub fn record_tick() {
    counter!("pokenews_ticks_total").increment(1);
}

/// Records a phase announcement.
pub fn record_announcement(phase: Phase) {
    counter!("pokenews_announcements_total", "phase" => phase.name()).increment(1);
}

/// Records an answered time query.
pub fn record_query(phase: QueryPhase) {
    counter!("pokenews_queries_total", "phase" => phase.name()).increment(1);
}

/// Records a configuration reload.
pub fn record_reload() {
    counter!("pokenews_reloads_total").increment(1);
}

/// Records a terminal action.
pub fn record_terminal_action() {
    counter!("pokenews_terminal_actions_total").increment(1);
}

/// Records a rejected chat command.
pub fn record_command_error(err: &CommandError) {
    let kind = match err {
        CommandError::Unknown(_) => "unknown",
        CommandError::PermissionDenied { .. } => "permission_denied",
    };
    counter!("pokenews_command_errors_total", "kind" => kind).increment(1);
}

/// Sets the remaining-ticks gauge.
#[allow(clippy::cast_precision_loss)]
pub fn set_remaining_ticks(remaining: i64) {
    gauge!("pokenews_remaining_ticks").set(remaining.max(0) as f64);
}
