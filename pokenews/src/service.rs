//! The `PokeNews` service
//!
//! Glues the scheduler and dispatcher to a [`Host`]. One instance runs on
//! the host's tick thread; every method completes without blocking.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use pokenews_core::markup::StyledText;

use crate::command::ChatCommand;
use crate::config::ConfigStore;
use crate::countdown::{CountdownScheduler, Phase, QueryPhase, Tick};
use crate::dispatch::AnnouncementDispatcher;
use crate::error::CommandError;
use crate::host::{CommandSource, Host};
use crate::observability::metrics;
use crate::observability::{Event, EventEmitter};

/// Feedback sent after a successful reload, after the prefix.
pub const RELOAD_CONFIRMATION: &str = " Config reloaded. Timer reset!";

/// Countdown announcer bound to a configuration store.
///
/// Every operation works on one configuration snapshot from start to
/// finish; a reload is only seen by the operations that follow it.
#[derive(Debug)]
pub struct PokeNews {
    scheduler: CountdownScheduler,
    events: EventEmitter,
}

impl PokeNews {
    /// Creates a service at the start of a fresh cycle.
    ///
    /// `events` receives diagnostics while `debug` is enabled.
    #[must_use]
    pub fn new(store: Arc<ConfigStore>, events: EventEmitter) -> Self {
        Self {
            scheduler: CountdownScheduler::new(store),
            events,
        }
    }

    /// Read access to the scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &CountdownScheduler {
        &self.scheduler
    }

    /// Advances one tick, announces the fired phase, and on
    /// [`Phase::Stolen`] hands the terminal action to the host.
    pub fn tick(&mut self, host: &mut dyn Host) -> Tick {
        let tick = self.scheduler.advance();
        self.deliver(host, &tick);
        tick
    }

    /// Reports and announces an evaluated tick against its own config.
    fn deliver(&self, host: &mut dyn Host, tick: &Tick) {
        metrics::record_tick();
        metrics::set_remaining_ticks(self.scheduler.remaining_under(&tick.config));

        if let Some(diag) = tick.diagnostic {
            debug!(tick = diag.tick, remaining = diag.remaining, "countdown");
            self.events.emit(Event::CountdownTick {
                timestamp: Utc::now(),
                tick: diag.tick,
                remaining: diag.remaining,
            });
        }

        if let Some(template) = tick.template() {
            info!(phase = %tick.phase, remaining = tick.remaining, "announcing phase");
            AnnouncementDispatcher::new(&tick.config).announce(host, template);
            metrics::record_announcement(tick.phase);
            if tick.config.debug {
                self.events.emit(Event::PhaseFired {
                    timestamp: Utc::now(),
                    phase: tick.phase,
                    remaining: tick.remaining,
                });
            }
        }

        if tick.phase == Phase::Stolen {
            let command = tick.config.terminal_action.as_str();
            host.execute_command(command);
            metrics::record_terminal_action();
            if tick.config.debug {
                self.events.emit(Event::TerminalActionExecuted {
                    timestamp: Utc::now(),
                    command: command.to_owned(),
                });
            }
        }
    }

    /// Parses, authorizes, and runs one chat command line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unknown`] for input outside the grammar and
    /// [`CommandError::PermissionDenied`] when `source` may not run it.
    /// Neither affects the countdown.
    pub fn handle_command(
        &mut self,
        host: &mut dyn Host,
        source: &CommandSource,
        line: &str,
    ) -> Result<ChatCommand, CommandError> {
        let command = line
            .parse::<ChatCommand>()
            .and_then(|command| command.authorize(source))
            .inspect_err(|err| {
                warn!(caller = %source, error = %err, "command rejected");
                metrics::record_command_error(err);
            })?;

        match command {
            ChatCommand::Query => {
                self.query(host, source);
            }
            ChatCommand::Reload => {
                self.reload(host, source);
            }
        }
        Ok(command)
    }

    /// Answers a time query for `source`.
    pub fn query(&self, host: &mut dyn Host, source: &CommandSource) -> StyledText {
        let config = self.scheduler.config();
        let remaining = self.scheduler.remaining_under(&config);
        let phase = QueryPhase::classify(remaining, &config);
        debug!(caller = %source, remaining, phase = %phase, "time query");
        metrics::record_query(phase);
        AnnouncementDispatcher::new(&config).respond(
            host,
            source,
            phase.template(&config),
            remaining,
        )
    }

    /// Reloads configuration, restarts the cycle, and confirms to `source`.
    ///
    /// Does not check permissions; [`handle_command`](Self::handle_command)
    /// does.
    pub fn reload(&mut self, host: &mut dyn Host, source: &CommandSource) -> StyledText {
        let config = self.scheduler.reload_from_store();
        info!(
            caller = %source,
            cycle_length = config.cycle_length,
            "configuration reloaded; timer reset"
        );
        metrics::record_reload();
        metrics::set_remaining_ticks(self.scheduler.remaining_under(&config));
        if config.debug {
            self.events.emit(Event::ConfigReloaded {
                timestamp: Utc::now(),
                caller: source.name.clone(),
                cycle_length: config.cycle_length,
            });
        }
        AnnouncementDispatcher::new(&config).confirm(host, source, RELOAD_CONFIRMATION)
    }
}
