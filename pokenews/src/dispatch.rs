//! Announcement dispatcher
//!
//! Resolves message templates, compiles them, and hands the result to the
//! [`Host`]. Each dispatcher is bound to the configuration snapshot of a
//! single operation.

use pokenews_core::config::{CountdownConfig, TICKS_PER_SECOND, TIME_PLACEHOLDER};
use pokenews_core::markup::{StyledText, compile};

use crate::host::{CommandSource, Host};

/// Formats a tick count as `"{h}h {m}m {s}s"`, dropping the hours when zero.
///
/// Negative counts are treated as zero.
#[must_use]
pub fn format_remaining(ticks: i64) -> String {
    let total_seconds = ticks.max(0) / i64::from(TICKS_PER_SECOND);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// Compiles templates and delivers them to a [`Host`].
///
/// A dispatcher borrows the configuration snapshot of one operation, so
/// the prefix always comes from the same config as the template.
#[derive(Debug, Clone, Copy)]
pub struct AnnouncementDispatcher<'a> {
    config: &'a CountdownConfig,
}

impl<'a> AnnouncementDispatcher<'a> {
    /// Creates a dispatcher over `config`.
    #[must_use]
    pub const fn new(config: &'a CountdownConfig) -> Self {
        Self { config }
    }

    /// Prefixes and compiles `body` without placeholder substitution.
    #[must_use]
    pub fn prefixed(&self, body: &str) -> StyledText {
        compile(&format!("{}{body}", self.config.message_prefix))
    }

    /// Broadcasts `template` to every user.
    ///
    /// `{time}` is not substituted here.
    pub fn announce(&self, host: &mut dyn Host, template: &str) -> StyledText {
        let text = self.prefixed(template);
        host.broadcast(&text);
        text
    }

    /// Answers a time query: every `{time}` in `template` becomes the
    /// formatted `remaining` count.
    pub fn respond(
        &self,
        host: &mut dyn Host,
        source: &CommandSource,
        template: &str,
        remaining: i64,
    ) -> StyledText {
        let body = template.replace(TIME_PLACEHOLDER, &format_remaining(remaining));
        let text = self.prefixed(&body);
        host.send_feedback(source, &text);
        text
    }

    /// Sends prefixed `body` to a single caller.
    pub fn confirm(&self, host: &mut dyn Host, source: &CommandSource, body: &str) -> StyledText {
        let text = self.prefixed(body);
        host.send_feedback(source, &text);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Delivery, RecordingHost};

    fn config(prefix: &str) -> CountdownConfig {
        CountdownConfig {
            message_prefix: prefix.to_string(),
            ..CountdownConfig::default()
        }
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(36_000), "30m 0s");
        assert_eq!(format_remaining(12_000), "10m 0s");
        assert_eq!(format_remaining(19), "0m 0s");
        assert_eq!(format_remaining(0), "0m 0s");
    }

    #[test]
    fn formats_hours_when_present() {
        // 1h 2m 3s = 3723 s
        assert_eq!(format_remaining(3723 * 20), "1h 2m 3s");
        assert_eq!(format_remaining(3600 * 20), "1h 0m 0s");
    }

    #[test]
    fn negative_formats_as_zero() {
        assert_eq!(format_remaining(-40), "0m 0s");
    }

    #[test]
    fn announce_prefixes_and_broadcasts() {
        let mut host = RecordingHost::new();
        let cfg = config("&c[PN] ");
        AnnouncementDispatcher::new(&cfg).announce(&mut host, "&fHello {time}");
        assert_eq!(host.deliveries().len(), 1);
        let Delivery::Broadcast(text) = &host.deliveries()[0] else {
            panic!("expected broadcast");
        };
        // No substitution on broadcast
        assert_eq!(text.plain_text(), "[PN] Hello {time}");
        assert_eq!(text.runs.len(), 2);
    }

    #[test]
    fn respond_substitutes_every_placeholder() {
        let mut host = RecordingHost::new();
        let ash = CommandSource::new("Ash", 0);
        let cfg = config("");
        AnnouncementDispatcher::new(&cfg).respond(&mut host, &ash, "{time} / {time}", 1200);
        assert_eq!(
            host.deliveries(),
            [Delivery::Feedback {
                to: "Ash".into(),
                text: compile("1m 0s / 1m 0s"),
            }]
        );
    }

    #[test]
    fn respond_without_placeholder_sends_template() {
        let mut host = RecordingHost::new();
        let cfg = config("");
        let text =
            AnnouncementDispatcher::new(&cfg).respond(&mut host, &CommandSource::console(), "soon", 100);
        assert_eq!(text.plain_text(), "soon");
    }

    #[test]
    fn prefix_comes_from_the_given_config() {
        let (old, new) = (config("OLD "), config("NEW "));
        assert_eq!(AnnouncementDispatcher::new(&old).prefixed("x").plain_text(), "OLD x");
        assert_eq!(AnnouncementDispatcher::new(&new).prefixed("x").plain_text(), "NEW x");
    }

    #[test]
    fn confirm_goes_to_caller_only() {
        let mut host = RecordingHost::new();
        let cfg = config("&a");
        AnnouncementDispatcher::new(&cfg).confirm(
            &mut host,
            &CommandSource::console(),
            " Config reloaded. Timer reset!",
        );
        assert_eq!(host.broadcasts().count(), 0);
        assert_eq!(
            host.deliveries()[0].plain_text(),
            " Config reloaded. Timer reset!"
        );
    }
}
