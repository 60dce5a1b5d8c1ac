//! Configuration schema types
//!
//! `CountdownConfig` is the single document stored in the configuration
//! file. Every field has a default, so partial files are valid and a
//! missing file is replaced by [`CountdownConfig::default`].

use serde::{Deserialize, Serialize};

/// Ticks per wall-clock second at the nominal host rate.
pub const TICKS_PER_SECOND: u32 = 20;

/// Spacing between the three final-countdown thresholds, in ticks.
pub const FINAL_STAGE_SPACING: u32 = 20;

/// Placeholder replaced with the formatted time in query responses.
pub const TIME_PLACEHOLDER: &str = "{time}";

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Tunable countdown parameters and message templates.
///
/// Loaded once at startup and replaced wholesale on reload. Offsets are
/// measured in ticks from the end of the cycle. Thresholds that sit closer
/// than [`FINAL_STAGE_SPACING`] apart, or a pre-event offset that collides
/// with a final stage, cause missed or merged announcements; this is not
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownConfig {
    /// Total ticks per cycle.
    #[serde(alias = "announceInterval")]
    pub cycle_length: u32,

    /// Remaining-tick count at which the pre-event warning fires.
    #[serde(alias = "countdownStart")]
    pub pre_event_offset: u32,

    /// Remaining-tick count at which the last final-countdown stage fires.
    #[serde(alias = "finalCountdownStart")]
    pub final_countdown_offset: u32,

    /// Query responses use the pending template at or below this many
    /// remaining ticks, and the grace template above it.
    pub pending_threshold: u32,

    /// Command the host executes when the cycle completes.
    #[serde(alias = "killCommand")]
    pub terminal_action: String,

    /// Emit per-second diagnostics to the observability sink.
    #[serde(alias = "debugMode")]
    pub debug: bool,

    /// Markup prepended to every announcement and response.
    pub message_prefix: String,

    /// Announced when `pre_event_offset` ticks remain.
    pub message_pre_event: String,

    /// Announced at `final_countdown_offset + 40` remaining ticks.
    pub message_final3: String,

    /// Announced at `final_countdown_offset + 20` remaining ticks.
    pub message_final2: String,

    /// Announced at `final_countdown_offset` remaining ticks.
    pub message_final1: String,

    /// Announced when the cycle completes.
    pub message_stolen: String,

    /// Query response while more than `pending_threshold` ticks remain.
    pub message_grace_period: String,

    /// Query response once `pending_threshold` or fewer ticks remain.
    pub message_pending: String,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            cycle_length: 36_000,
            pre_event_offset: 600,
            final_countdown_offset: 60,
            pending_threshold: 12_000,
            terminal_action: "pokekill".to_string(),
            debug: false,
            message_prefix: "&#ffffff&l[&#dd959c&lP&#dd959c&lo&#dd959c&lk&#dd959c&lé\
                             &#ffffff&lN&#ffffff&le&#ffffff&lw&#ffffff&ls&#ffffff&l] &#3b4cca&l"
                .to_string(),
            message_pre_event: "Team Rocket is plotting to steal wild Pokémon in 30 seconds!"
                .to_string(),
            message_final3: "Team Rocket will steal all wild Pokémon in 3 seconds!".to_string(),
            message_final2: "Team Rocket will steal all wild Pokémon in 2 seconds!".to_string(),
            message_final1: "Team Rocket will steal all wild Pokémon in 1 second!".to_string(),
            message_stolen: "Team Rocket has stolen all wild Pokémon!".to_string(),
            message_grace_period:
                "No major news. Team Rocket is counting Pokémon! Next wipe in &#ffffff&l{time}"
                    .to_string(),
            message_pending: "Team Rocket is lurking nearby and will steal wild Pokémon soon! \
                              Time left: &#ffffff&l{time}"
                .to_string(),
        }
    }
}

impl CountdownConfig {
    /// Cycle length as a signed tick count for remaining-time arithmetic.
    #[must_use]
    pub fn cycle_ticks(&self) -> i64 {
        i64::from(self.cycle_length)
    }

    /// Remaining-tick thresholds of the three final stages, earliest first
    /// (`FINAL_3`, `FINAL_2`, `FINAL_1`).
    #[must_use]
    pub fn final_thresholds(&self) -> [i64; 3] {
        let base = i64::from(self.final_countdown_offset);
        let step = i64::from(FINAL_STAGE_SPACING);
        [base + 2 * step, base + step, base]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_cycle() {
        let cfg = CountdownConfig::default();
        assert_eq!(cfg.cycle_length, 36_000);
        assert_eq!(cfg.pre_event_offset, 600);
        assert_eq!(cfg.final_countdown_offset, 60);
        assert_eq!(cfg.pending_threshold, 12_000);
        assert_eq!(cfg.terminal_action, "pokekill");
        assert!(!cfg.debug);
        assert!(cfg.message_grace_period.contains(TIME_PLACEHOLDER));
        assert!(cfg.message_pending.contains(TIME_PLACEHOLDER));
        assert!(cfg.message_prefix.contains("&#dd959c&lé&#ffffff&lN"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(CountdownConfig::default()).unwrap();
        assert_eq!(json["cycleLength"], 36_000);
        assert_eq!(json["finalCountdownOffset"], 60);
        assert_eq!(json["terminalAction"], "pokekill");
        assert!(json.get("messageGracePeriod").is_some());
        assert!(json.get("cycle_length").is_none());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let cfg: CountdownConfig =
            serde_json::from_str(r#"{ "cycleLength": 1200, "debug": true }"#).unwrap();
        assert_eq!(cfg.cycle_length, 1200);
        assert!(cfg.debug);
        assert_eq!(cfg.pre_event_offset, 600);
        assert_eq!(cfg.message_stolen, CountdownConfig::default().message_stolen);
    }

    #[test]
    fn legacy_keys_are_accepted() {
        let cfg: CountdownConfig = serde_json::from_str(
            r#"{
                "announceInterval": 72000,
                "countdownStart": 400,
                "finalCountdownStart": 100,
                "killCommand": "kill @e[type=pokemon]",
                "debugMode": true
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.cycle_length, 72_000);
        assert_eq!(cfg.pre_event_offset, 400);
        assert_eq!(cfg.final_countdown_offset, 100);
        assert_eq!(cfg.terminal_action, "kill @e[type=pokemon]");
        assert!(cfg.debug);
    }

    #[test]
    fn negative_tick_count_is_rejected() {
        let result = serde_json::from_str::<CountdownConfig>(r#"{ "cycleLength": -5 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn final_thresholds_are_spaced_by_one_second() {
        let cfg = CountdownConfig::default();
        assert_eq!(cfg.final_thresholds(), [100, 80, 60]);
    }

    #[test]
    fn round_trips_through_pretty_json() {
        let cfg = CountdownConfig {
            cycle_length: 4000,
            terminal_action: "say done".to_string(),
            ..CountdownConfig::default()
        };
        let text = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(text.contains('\n'));
        let back: CountdownConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
