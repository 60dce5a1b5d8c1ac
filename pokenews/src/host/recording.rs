//! In-memory host that records every delivery in order.
//!
//! Used by `simulate` and by tests; nothing is sent anywhere and the
//! terminal action is never run.

use pokenews_core::markup::StyledText;

use super::{CommandSource, Host};

/// One thing a [`RecordingHost`] was asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// A message to all users.
    Broadcast(StyledText),
    /// A message to one caller.
    Feedback {
        /// Name of the recipient.
        to: String,
        /// Message body.
        text: StyledText,
    },
    /// A terminal action request.
    Command(String),
}

impl Delivery {
    /// Plain text of the message, or the command string.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Broadcast(text) | Self::Feedback { text, .. } => text.plain_text(),
            Self::Command(command) => command.clone(),
        }
    }
}

/// [`Host`] that keeps deliveries in a `Vec`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    deliveries: Vec<Delivery>,
}

impl RecordingHost {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All deliveries so far, oldest first.
    #[must_use]
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<Delivery> {
        std::mem::take(&mut self.deliveries)
    }

    /// Broadcast messages only.
    pub fn broadcasts(&self) -> impl Iterator<Item = &StyledText> {
        self.deliveries.iter().filter_map(|d| match d {
            Delivery::Broadcast(text) => Some(text),
            _ => None,
        })
    }

    /// Terminal actions only.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.deliveries.iter().filter_map(|d| match d {
            Delivery::Command(command) => Some(command.as_str()),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn broadcast(&mut self, text: &StyledText) {
        self.deliveries.push(Delivery::Broadcast(text.clone()));
    }

    fn send_feedback(&mut self, source: &CommandSource, text: &StyledText) {
        self.deliveries.push(Delivery::Feedback {
            to: source.name.clone(),
            text: text.clone(),
        });
    }

    fn execute_command(&mut self, command: &str) {
        self.deliveries.push(Delivery::Command(command.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokenews_core::markup::compile;

    #[test]
    fn records_in_call_order() {
        let mut host = RecordingHost::new();
        host.broadcast(&compile("&cone"));
        host.send_feedback(&CommandSource::new("Misty", 0), &compile("two"));
        host.execute_command("pokekill");

        let texts: Vec<String> = host.deliveries().iter().map(Delivery::plain_text).collect();
        assert_eq!(texts, ["one", "two", "pokekill"]);
        assert!(matches!(
            &host.deliveries()[1],
            Delivery::Feedback { to, .. } if to == "Misty"
        ));
        assert_eq!(host.broadcasts().count(), 1);
        assert_eq!(host.commands().collect::<Vec<_>>(), ["pokekill"]);
    }

    #[test]
    fn take_drains() {
        let mut host = RecordingHost::new();
        host.execute_command("x");
        assert_eq!(host.take().len(), 1);
        assert!(host.deliveries().is_empty());
    }
}
