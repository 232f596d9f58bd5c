//! focusflow - A Pomodoro focus timer for the terminal
//!
//! This crate provides the timer engine (phases, countdown, session counting,
//! auto-advance, and audio cues) along with a terminal UI and a small CLI for
//! configuration and headless simulation.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocusFlowError;
pub use features::focus::{Phase, Settings, TimerEngine, TimerState};
