//! Configuration management for focusflow.
//!
//! This module handles loading and saving configuration from `~/.focusflow/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, SoundConfig, TimerConfig, KEYS};
