//! Console host
//!
//! Reference [`Host`] for running `PokeNews` outside a game server. Messages
//! are written to a line-oriented sink (stdout in production), chat
//! commands are read from stdin, and ticks come from a 20 Hz interval.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use pokenews_core::markup::StyledText;

use super::render::RenderMode;
use super::{CommandSource, Host};
use crate::error::Result;
use crate::service::PokeNews;

/// Wall-clock length of one tick, `1 s / TICKS_PER_SECOND`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Console host settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Output encoding.
    pub render: RenderMode,
    /// Spawn terminal actions instead of only logging them.
    pub allow_terminal_action: bool,
}

/// [`Host`] writing rendered messages to `W`.
#[derive(Debug)]
pub struct ConsoleHost<W: Write> {
    out: W,
    options: ConsoleOptions,
}

impl ConsoleHost<std::io::Stdout> {
    /// Console host on stdout.
    #[must_use]
    pub fn stdout(options: ConsoleOptions) -> Self {
        Self::new(std::io::stdout(), options)
    }
}

impl<W: Write> ConsoleHost<W> {
    /// Creates a host writing to `out`.
    pub const fn new(out: W, options: ConsoleOptions) -> Self {
        Self { out, options }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_message(&mut self, recipient: Option<&str>, text: &StyledText) {
        let line = match (self.options.render, recipient) {
            (RenderMode::Json, _) => {
                serde_json::json!({ "to": recipient, "message": text }).to_string()
            }
            (mode, Some(name)) => format!("[@{name}] {}", mode.render(text)),
            (mode, None) => mode.render(text),
        };
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to write message");
        }
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn broadcast(&mut self, text: &StyledText) {
        self.write_message(None, text);
    }

    fn send_feedback(&mut self, source: &CommandSource, text: &StyledText) {
        self.write_message(Some(&source.name), text);
    }

    fn execute_command(&mut self, command: &str) {
        if self.options.allow_terminal_action {
            spawn_terminal_action(command);
        } else {
            info!(command, "terminal action skipped (pass --allow-terminal-action to run it)");
        }
    }
}

/// Splits `command` shell-style and spawns it without waiting.
///
/// Must be called from within a Tokio runtime.
fn spawn_terminal_action(command: &str) {
    let Some(argv) = shlex::split(command).filter(|argv| !argv.is_empty()) else {
        warn!(command, "terminal action is empty or badly quoted; not run");
        return;
    };

    match tokio::process::Command::new(&argv[0])
        .args(&argv[1..])
        .stdin(std::process::Stdio::null())
        .spawn()
    {
        Ok(mut child) => {
            info!(command, pid = child.id(), "terminal action started");
            let command = command.to_owned();
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) => debug!(command, %status, "terminal action finished"),
                    Err(err) => warn!(command, error = %err, "terminal action wait failed"),
                }
            });
        }
        Err(err) => warn!(command, error = %err, "failed to start terminal action"),
    }
}

/// Drives `service` until `cancel` fires.
///
/// Each line read from `input` is handled as a chat command from
/// `source`; rejected commands are logged by the service and otherwise
/// ignored. When `input` reaches EOF the countdown keeps running.
///
/// # Errors
///
/// Returns an I/O error if reading `input` fails.
pub async fn run_loop<W, R>(
    service: &mut PokeNews,
    host: &mut ConsoleHost<W>,
    source: &CommandSource,
    input: R,
    cancel: CancellationToken,
) -> Result<()>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                debug!("run loop cancelled");
                return Ok(());
            }
            _ = interval.tick() => {
                service.tick(host);
            }
            line = lines.next_line(), if input_open => match line? {
                Some(line) if line.trim().is_empty() => {}
                Some(line) => {
                    // Rejections are logged and counted by the service
                    service.handle_command(host, source, &line).ok();
                }
                None => {
                    debug!("command input closed");
                    input_open = false;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ConfigStore;
    use crate::observability::EventEmitter;
    use pokenews_core::config::{CountdownConfig, TICKS_PER_SECOND};
    use pokenews_core::markup::compile;

    fn host(render: RenderMode) -> ConsoleHost<Vec<u8>> {
        ConsoleHost::new(
            Vec::new(),
            ConsoleOptions {
                render,
                allow_terminal_action: false,
            },
        )
    }

    fn output(host: ConsoleHost<Vec<u8>>) -> String {
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn tick_interval_matches_tick_rate() {
        assert_eq!(TICK_INTERVAL, Duration::from_millis(50));
        assert_eq!(TICK_INTERVAL * TICKS_PER_SECOND, Duration::from_secs(1));
    }

    #[test]
    fn broadcast_and_feedback_lines() {
        let mut h = host(RenderMode::Plain);
        h.broadcast(&compile("&cHello"));
        h.send_feedback(&CommandSource::new("Ash", 0), &compile("You"));
        assert_eq!(output(h), "Hello\n[@Ash] You\n");
    }

    #[test]
    fn json_lines_carry_recipient() {
        let mut h = host(RenderMode::Json);
        h.broadcast(&compile("all"));
        h.send_feedback(&CommandSource::new("Misty", 0), &compile("one"));
        let out = output(h);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert!(lines[0]["to"].is_null());
        assert_eq!(lines[0]["message"]["runs"][0]["text"], "all");
        assert_eq!(lines[1]["to"], "Misty");
    }

    #[test]
    fn terminal_action_is_not_run_by_default() {
        let mut h = host(RenderMode::Plain);
        // Would fail loudly outside a runtime if it tried to spawn
        h.execute_command("definitely-not-a-real-binary --now");
        assert_eq!(output(h), "");
    }

    #[tokio::test]
    async fn run_loop_handles_commands_and_stops_on_cancel() {
        let store = Arc::new(ConfigStore::in_memory(CountdownConfig {
            message_prefix: String::new(),
            message_grace_period: "left {time}".into(),
            ..CountdownConfig::default()
        }));
        let mut service = PokeNews::new(store, EventEmitter::noop());
        let mut h = host(RenderMode::Plain);
        let cancel = CancellationToken::new();

        let stopper = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            stopper.cancel();
        });

        let input: &[u8] = b"\n/pokenews\nnonsense\n";
        run_loop(&mut service, &mut h, &CommandSource::console(), input, cancel)
            .await
            .unwrap();

        assert!(service.scheduler().elapsed_ticks() >= 1);
        let out = output(h);
        assert_eq!(out.lines().count(), 1, "{out}");
        assert!(out.starts_with("[@Server] left 29m 59s") || out.starts_with("[@Server] left 30m 0s"));
    }
}
