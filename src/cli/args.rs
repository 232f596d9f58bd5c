use std::ops::RangeInclusive;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;
use crate::features::focus::settings::{
    MAX_MINUTES, MAX_SESSIONS_UNTIL_LONG_BREAK, MIN_MINUTES, MIN_SESSIONS_UNTIL_LONG_BREAK,
};

fn minutes_range() -> RangeInclusive<i64> {
    i64::from(MIN_MINUTES)..=i64::from(MAX_MINUTES)
}

fn sessions_range() -> RangeInclusive<i64> {
    i64::from(MIN_SESSIONS_UNTIL_LONG_BREAK)..=i64::from(MAX_SESSIONS_UNTIL_LONG_BREAK)
}

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A Pomodoro focus timer for the terminal")]
#[command(long_about = "focusflow - A Pomodoro focus timer for the terminal

Alternates focus sessions with short breaks, and takes a long break after
every few sessions. Durations, the long-break period, sounds, and
auto-advance are configurable.

QUICK START:
  focusflow                    Open the timer with configured durations
  focusflow run --focus 50     Open the timer with 50-minute focus sessions
  focusflow config show        Show the current configuration
  focusflow simulate           Preview a cycle without waiting

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focusflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Starts the terminal UI loaded with a focus session. Flags override
    /// the configured durations for this run only.
    ///
    /// # Keys
    ///
    ///   space    Start / pause
    ///   r        Reset the current phase
    ///   1 2 3    Switch to focus / short break / long break (while paused)
    ///   s        Edit settings
    ///   m        Toggle mute
    ///   a        Toggle auto-advance
    ///   x        Reset session statistics
    ///   q        Quit
    ///
    /// # Examples
    ///
    ///   focusflow run                      Use configured durations
    ///   focusflow run --focus 50 --short 10
    ///   focusflow run --auto-advance --muted
    #[command(alias = "r")]
    Run(RunArgs),

    /// Manage the configuration file
    ///
    /// Configuration lives in ~/.focusflow/config.yaml.
    ///
    /// # Examples
    ///
    ///   focusflow config show
    ///   focusflow config set timer.focus_minutes 50
    ///   focusflow config set sound.backend file
    ///   focusflow config reset
    Config(ConfigArgs),

    /// Simulate a timer run without waiting
    ///
    /// Runs the timer on a virtual clock with auto-advance on and reports
    /// each completed phase and when it ended.
    ///
    /// # Examples
    ///
    ///   focusflow simulate                 Eight phases with configured durations
    ///   focusflow simulate --phases 16 --every 3
    ///   focusflow simulate -o json
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focusflow completions bash > /usr/local/etc/bash_completion.d/focusflow
    ///   focusflow completions zsh > ~/.zsh/completions/_focusflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Duration overrides shared by `run` and `simulate`.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct DurationArgs {
    /// Focus duration in minutes (1-999)
    #[arg(long, short = 'f', value_parser = clap::value_parser!(u32).range(minutes_range()))]
    pub focus: Option<u32>,

    /// Short break duration in minutes (1-999)
    #[arg(long, short = 's', value_parser = clap::value_parser!(u32).range(minutes_range()))]
    pub short: Option<u32>,

    /// Long break duration in minutes (1-999)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(minutes_range()))]
    pub long: Option<u32>,

    /// Focus sessions before a long break (2-999)
    #[arg(long, short = 'e', value_parser = clap::value_parser!(u32).range(sessions_range()))]
    pub every: Option<u32>,
}

impl DurationArgs {
    /// Overlay these flags on a timer config.
    #[must_use]
    pub fn apply(&self, base: &TimerConfig) -> TimerConfig {
        TimerConfig {
            focus_minutes: self.focus.unwrap_or(base.focus_minutes),
            short_break_minutes: self.short.unwrap_or(base.short_break_minutes),
            long_break_minutes: self.long.unwrap_or(base.long_break_minutes),
            sessions_until_long_break: self.every.unwrap_or(base.sessions_until_long_break),
            auto_advance: base.auto_advance,
        }
    }
}

/// Arguments for the interactive timer.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct RunArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Start the next phase automatically two seconds after a completion
    #[arg(long, short = 'a')]
    pub auto_advance: bool,

    /// Start with sounds muted
    #[arg(long, short = 'm')]
    pub muted: bool,
}

/// Arguments for the simulator.
#[derive(Args, Debug, Clone, Copy)]
pub struct SimulateArgs {
    /// Number of phases to complete
    #[arg(long, short = 'p', default_value = "8", value_parser = clap::value_parser!(u32).range(0..=1000))]
    pub phases: u32,

    #[command(flatten)]
    pub durations: DurationArgs,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a value by dotted key
    ///
    /// Examples:
    ///   focusflow config set timer.focus_minutes 50
    ///   focusflow config set timer.auto_advance true
    ///   focusflow config set sound.files.time_up ~/sounds/bell.ogg
    Set {
        /// Dotted key, e.g. timer.focus_minutes
        key: String,
        /// New value (empty to clear optional values)
        value: String,
    },

    /// Restore the default configuration
    Reset,
}
