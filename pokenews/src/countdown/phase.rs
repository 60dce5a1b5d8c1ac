//! Countdown phases
//!
//! Phases are edge-triggered: each one fires only on the tick where the
//! remaining count equals its threshold. When two thresholds coincide the
//! first entry of [`Phase::PRIORITY`] wins.

use std::fmt;

use serde::Serialize;

use pokenews_core::config::CountdownConfig;

/// Phase of the announcement cycle on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// No announcement on this tick.
    Idle,
    /// Early warning at `pre_event_offset`.
    PreEvent,
    /// Final countdown, three seconds out.
    #[serde(rename = "FINAL_3")]
    Final3,
    /// Final countdown, two seconds out.
    #[serde(rename = "FINAL_2")]
    Final2,
    /// Final countdown, one second out.
    #[serde(rename = "FINAL_1")]
    Final1,
    /// Cycle complete; the terminal action runs.
    Stolen,
}

impl Phase {
    /// Evaluation order of the firing phases. The first match wins.
    pub const PRIORITY: [Self; 5] = [
        Self::Stolen,
        Self::Final1,
        Self::Final2,
        Self::Final3,
        Self::PreEvent,
    ];

    /// Remaining-tick count at which this phase fires.
    #[must_use]
    pub fn threshold(self, config: &CountdownConfig) -> Option<i64> {
        let [final3, final2, final1] = config.final_thresholds();
        match self {
            Self::Idle => None,
            Self::PreEvent => Some(i64::from(config.pre_event_offset)),
            Self::Final3 => Some(final3),
            Self::Final2 => Some(final2),
            Self::Final1 => Some(final1),
            Self::Stolen => Some(0),
        }
    }

    /// Classifies a remaining-tick count.
    #[must_use]
    pub fn classify(remaining: i64, config: &CountdownConfig) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|phase| phase.threshold(config) == Some(remaining))
            .unwrap_or(Self::Idle)
    }

    /// Message template announced when this phase fires.
    #[must_use]
    pub fn template(self, config: &CountdownConfig) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::PreEvent => Some(&config.message_pre_event),
            Self::Final3 => Some(&config.message_final3),
            Self::Final2 => Some(&config.message_final2),
            Self::Final1 => Some(&config.message_final1),
            Self::Stolen => Some(&config.message_stolen),
        }
    }

    /// Returns `true` for every phase except [`Phase::Idle`].
    #[must_use]
    pub const fn fires(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Upper-case name used in logs, events, and metric labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::PreEvent => "PRE_EVENT",
            Self::Final3 => "FINAL_3",
            Self::Final2 => "FINAL_2",
            Self::Final1 => "FINAL_1",
            Self::Stolen => "STOLEN",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which template answers an on-demand time query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryPhase {
    /// More than `pending_threshold` ticks remain.
    Grace,
    /// `pending_threshold` or fewer ticks remain.
    Pending,
}

impl QueryPhase {
    /// Classifies a remaining-tick count. The threshold itself is pending.
    #[must_use]
    pub fn classify(remaining: i64, config: &CountdownConfig) -> Self {
        if remaining > i64::from(config.pending_threshold) {
            Self::Grace
        } else {
            Self::Pending
        }
    }

    /// Response template for this phase.
    #[must_use]
    pub fn template(self, config: &CountdownConfig) -> &str {
        match self {
            Self::Grace => &config.message_grace_period,
            Self::Pending => &config.message_pending,
        }
    }

    /// Upper-case name used in logs and metric labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grace => "GRACE",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CountdownConfig {
        CountdownConfig::default()
    }

    #[test]
    fn thresholds_follow_config() {
        let cfg = config();
        assert_eq!(Phase::Stolen.threshold(&cfg), Some(0));
        assert_eq!(Phase::Final1.threshold(&cfg), Some(60));
        assert_eq!(Phase::Final2.threshold(&cfg), Some(80));
        assert_eq!(Phase::Final3.threshold(&cfg), Some(100));
        assert_eq!(Phase::PreEvent.threshold(&cfg), Some(600));
        assert_eq!(Phase::Idle.threshold(&cfg), None);
    }

    #[test]
    fn classify_exact_thresholds() {
        let cfg = config();
        assert_eq!(Phase::classify(0, &cfg), Phase::Stolen);
        assert_eq!(Phase::classify(60, &cfg), Phase::Final1);
        assert_eq!(Phase::classify(80, &cfg), Phase::Final2);
        assert_eq!(Phase::classify(100, &cfg), Phase::Final3);
        assert_eq!(Phase::classify(600, &cfg), Phase::PreEvent);
    }

    #[test]
    fn classify_is_edge_triggered() {
        let cfg = config();
        for remaining in [1, 59, 61, 79, 81, 99, 101, 599, 601, 36_000, -1] {
            assert_eq!(Phase::classify(remaining, &cfg), Phase::Idle, "{remaining}");
        }
    }

    #[test]
    fn priority_breaks_ties() {
        // Final offset 0 collides FINAL_1 with STOLEN; STOLEN wins
        let cfg = CountdownConfig {
            final_countdown_offset: 0,
            ..config()
        };
        assert_eq!(Phase::classify(0, &cfg), Phase::Stolen);
        assert_eq!(Phase::classify(20, &cfg), Phase::Final2);

        // Pre-event colliding with FINAL_3; the final stage wins
        let cfg = CountdownConfig {
            pre_event_offset: 100,
            ..config()
        };
        assert_eq!(Phase::classify(100, &cfg), Phase::Final3);
    }

    #[test]
    fn templates_map_to_messages() {
        let cfg = config();
        assert_eq!(Phase::Stolen.template(&cfg), Some(cfg.message_stolen.as_str()));
        assert_eq!(Phase::Final3.template(&cfg), Some(cfg.message_final3.as_str()));
        assert_eq!(Phase::Idle.template(&cfg), None);
        assert!(!Phase::Idle.fires());
        assert!(Phase::PRIORITY.iter().all(|p| p.fires()));
    }

    #[test]
    fn query_phase_boundary() {
        let cfg = config();
        let t = i64::from(cfg.pending_threshold);
        assert_eq!(QueryPhase::classify(t, &cfg), QueryPhase::Pending);
        assert_eq!(QueryPhase::classify(t + 1, &cfg), QueryPhase::Grace);
        assert_eq!(QueryPhase::classify(0, &cfg), QueryPhase::Pending);
        assert_eq!(
            QueryPhase::Grace.template(&cfg),
            cfg.message_grace_period.as_str()
        );
    }

    #[test]
    fn names_and_serialization() {
        assert_eq!(Phase::Final3.to_string(), "FINAL_3");
        assert_eq!(QueryPhase::Pending.to_string(), "PENDING");
        assert_eq!(
            serde_json::to_string(&Phase::PreEvent).unwrap(),
            "\"PRE_EVENT\""
        );
    }
}
