//! CLI argument definitions
//!
//! All Clap derive structs for `PokeNews` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::host::{RELOAD_PERMISSION_LEVEL, RenderMode};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Recurring event countdown announcer.
#[derive(Parser, Debug)]
#[command(name = "pokenews", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON configuration file.
    #[arg(
        short,
        long,
        global = true,
        env = "POKENEWS_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control for logs.
    #[arg(long, default_value = "auto", global = true, env = "POKENEWS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "POKENEWS_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the countdown at 20 ticks per second, reading chat commands
    /// from stdin.
    Run(RunArgs),

    /// Run a fixed number of ticks instantly and print what would be sent.
    Simulate(SimulateArgs),

    /// Compile markup and print the result.
    Render(RenderArgs),

    /// Inspect or create the configuration file.
    Config(ConfigCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Run / Simulate / Render
// ============================================================================

/// Arguments for `run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// How messages are written to stdout.
    #[arg(long, default_value = "ansi", env = "POKENEWS_RENDER")]
    pub render: RenderMode,

    /// Permission level of commands typed on stdin.
    #[arg(
        long,
        default_value_t = RELOAD_PERMISSION_LEVEL,
        value_parser = clap::value_parser!(u8).range(0..=4)
    )]
    pub permission_level: u8,

    /// Actually execute the terminal action when a cycle completes.
    #[arg(long, env = "POKENEWS_ALLOW_TERMINAL_ACTION")]
    pub allow_terminal_action: bool,

    /// Serve Prometheus metrics on 127.0.0.1:<PORT>.
    #[arg(long, env = "POKENEWS_METRICS_PORT")]
    pub metrics_port: Option<u16>,

    /// Write debug events to this file instead of stderr.
    #[arg(long, env = "POKENEWS_EVENTS_FILE")]
    pub events_file: Option<PathBuf>,
}

/// Arguments for `simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of ticks to run.
    #[arg(long)]
    pub ticks: u64,

    /// Issue a time query after the given tick (repeatable).
    #[arg(long = "query-at", value_name = "TICK")]
    pub query_at: Vec<u64>,

    /// How messages are printed.
    #[arg(long, default_value = "plain")]
    pub render: RenderMode,

    /// Write debug events to this file.
    #[arg(long)]
    pub events_file: Option<PathBuf>,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Markup to compile, e.g. `"&#3b4cca&lHello &rworld"`.
    pub markup: String,

    /// Output encoding.
    #[arg(long, default_value = "ansi")]
    pub render: RenderMode,
}

// ============================================================================
// Config Command
// ============================================================================

/// Configuration file commands.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Config subcommand.
    #[command(subcommand)]
    pub subcommand: ConfigSubcommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Write the default configuration file.
    Init(ConfigInitArgs),

    /// Print the effective configuration as JSON.
    Show,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
