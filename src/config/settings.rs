//! Configuration settings for focusflow.
//!
//! Settings are loaded from `~/.focusflow/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::FocusFlowError;
use crate::features::focus::settings::{
    DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SESSIONS_UNTIL_LONG_BREAK,
    DEFAULT_SHORT_BREAK_MINUTES, MAX_MINUTES, MAX_SESSIONS_UNTIL_LONG_BREAK, MIN_MINUTES,
    MIN_SESSIONS_UNTIL_LONG_BREAK,
};
use crate::features::focus::{Settings, SoundBackend, SoundFiles, MAX_VOLUME};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer durations and behavior.
    pub timer: TimerConfig,
    /// Audio cue settings.
    pub sound: SoundConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus duration in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of focus sessions before a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
    /// Start the next phase automatically after a completion.
    #[serde(default)]
    pub auto_advance: bool,
}

/// Audio cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    /// Start muted.
    pub muted: bool,
    /// Which player to use.
    pub backend: SoundBackend,
    /// Playback volume for the `file` backend, 0-100.
    #[serde(default = "default_volume")]
    pub volume: u8,
    /// Sound files for the `file` backend.
    pub files: SoundFiles,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_short_break() -> u32 {
    DEFAULT_SHORT_BREAK_MINUTES
}

const fn default_long_break() -> u32 {
    DEFAULT_LONG_BREAK_MINUTES
}

const fn default_sessions_until_long_break() -> u32 {
    DEFAULT_SESSIONS_UNTIL_LONG_BREAK
}

const fn default_volume() -> u8 {
    MAX_VOLUME
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions_until_long_break: default_sessions_until_long_break(),
            auto_advance: false,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            muted: false,
            backend: SoundBackend::default(),
            volume: default_volume(),
            files: SoundFiles::default(),
        }
    }
}

impl TimerConfig {
    /// Engine settings, with hand-edited values clamped into range.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::clamped(
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
            self.sessions_until_long_break,
        )
    }
}

/// Keys accepted by [`Config::set`].
pub const KEYS: &[&str] = &[
    "general.default_output",
    "general.color",
    "timer.focus_minutes",
    "timer.short_break_minutes",
    "timer.long_break_minutes",
    "timer.sessions_until_long_break",
    "timer.auto_advance",
    "sound.muted",
    "sound.backend",
    "sound.volume",
    "sound.files.start",
    "sound.files.stop",
    "sound.files.time_up",
];

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `FocusFlowError::Yaml` if the config file exists but cannot be
    /// parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusFlowError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusFlowError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusFlowError> {
        let contents = serde_yaml::to_string(self)?;

        std::fs::write(path, contents).map_err(|e| {
            FocusFlowError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Set a single value by dotted key, e.g. `timer.focus_minutes`.
    ///
    /// An empty value clears a sound file.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FocusFlowError> {
        match key {
            "general.default_output" => {
                self.general.default_output = parse_enum(key, value)?;
            }
            "general.color" => self.general.color = parse_enum(key, value)?,
            "timer.focus_minutes" => {
                self.timer.focus_minutes = parse_in_range(key, value, MIN_MINUTES, MAX_MINUTES)?;
            }
            "timer.short_break_minutes" => {
                self.timer.short_break_minutes = parse_in_range(key, value, MIN_MINUTES, MAX_MINUTES)?;
            }
            "timer.long_break_minutes" => {
                self.timer.long_break_minutes = parse_in_range(key, value, MIN_MINUTES, MAX_MINUTES)?;
            }
            "timer.sessions_until_long_break" => {
                self.timer.sessions_until_long_break = parse_in_range(
                    key,
                    value,
                    MIN_SESSIONS_UNTIL_LONG_BREAK,
                    MAX_SESSIONS_UNTIL_LONG_BREAK,
                )?;
            }
            "timer.auto_advance" => self.timer.auto_advance = parse_bool(key, value)?,
            "sound.muted" => self.sound.muted = parse_bool(key, value)?,
            "sound.backend" => self.sound.backend = parse_enum(key, value)?,
            "sound.volume" => self.sound.volume = parse_volume(key, value)?,
            "sound.files.start" => self.sound.files.start = non_empty_path(value),
            "sound.files.stop" => self.sound.files.stop = non_empty_path(value),
            "sound.files.time_up" => self.sound.files.time_up = non_empty_path(value),
            _ => {
                return Err(FocusFlowError::InvalidArgument(format!(
                    "Unknown config key '{key}'. Valid keys: {}",
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_in_range(key: &str, value: &str, min: u32, max: u32) -> Result<u32, FocusFlowError> {
    let n: u32 = value.trim().parse().map_err(|_| {
        FocusFlowError::InvalidArgument(format!("{key} must be a whole number, got '{value}'"))
    })?;
    if !(min..=max).contains(&n) {
        return Err(FocusFlowError::InvalidArgument(format!(
            "{key} must be between {min} and {max}, got {n}"
        )));
    }
    Ok(n)
}

fn parse_volume(key: &str, value: &str) -> Result<u8, FocusFlowError> {
    let n = parse_in_range(key, value, 0, u32::from(MAX_VOLUME))?;
    u8::try_from(n).map_err(|_| {
        FocusFlowError::InvalidArgument(format!("{key} must be between 0 and {MAX_VOLUME}"))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FocusFlowError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(FocusFlowError::InvalidArgument(format!(
            "{key} must be true or false, got '{value}'"
        ))),
    }
}

fn parse_enum<T: serde::de::DeserializeOwned>(key: &str, value: &str) -> Result<T, FocusFlowError> {
    serde_yaml::from_str(value.trim())
        .map_err(|_| FocusFlowError::InvalidArgument(format!("Invalid value '{value}' for {key}")))
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.long_break_minutes, 15);
        assert_eq!(config.timer.sessions_until_long_break, 4);
        assert!(!config.timer.auto_advance);
        assert_eq!(config.sound.backend, SoundBackend::Bell);
        assert_eq!(config.sound.volume, 100);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.focus_minutes = 30;
        config.sound.muted = true;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.focus_minutes, 30);
        assert!(loaded.sound.muted);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  focus_minutes: 45
sound:
  backend: file
  volume: 40
  files:
    time_up: /usr/share/sounds/bell.oga
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom values should be loaded
        assert_eq!(config.timer.focus_minutes, 45);
        assert_eq!(config.sound.backend, SoundBackend::File);
        assert_eq!(config.sound.volume, 40);
        assert_eq!(
            config.sound.files.time_up,
            Some(PathBuf::from("/usr/share/sounds/bell.oga"))
        );
        // Defaults should be used for missing fields
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, FocusFlowError::Yaml(_)));
    }

    #[test]
    fn test_hand_edited_values_are_clamped() {
        let timer = TimerConfig {
            focus_minutes: 0,
            sessions_until_long_break: 1,
            ..TimerConfig::default()
        };
        let settings = timer.settings();
        assert_eq!(settings.focus_minutes(), 1);
        assert_eq!(settings.sessions_until_long_break(), 2);
        assert_eq!(settings.short_break_minutes(), 5);
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("timer.focus_minutes", "50").unwrap();
        config.set("timer.auto_advance", "yes").unwrap();
        config.set("sound.backend", "none").unwrap();
        config.set("general.default_output", "json").unwrap();
        config.set("sound.files.start", "/tmp/start.wav").unwrap();
        config.set("sound.volume", "25").unwrap();
        config.set("timer.long_break_minutes", "999").unwrap();

        assert_eq!(config.timer.focus_minutes, 50);
        assert!(config.timer.auto_advance);
        assert_eq!(config.sound.backend, SoundBackend::None);
        assert_eq!(config.general.default_output, OutputFormat::Json);
        assert_eq!(config.sound.files.start, Some(PathBuf::from("/tmp/start.wav")));
        assert_eq!(config.sound.volume, 25);
        assert_eq!(config.timer.long_break_minutes, 999);

        config.set("sound.files.start", "").unwrap();
        assert_eq!(config.sound.files.start, None);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut config = Config::default();
        assert!(config.set("timer.focus_minutes", "0").is_err());
        assert!(config.set("timer.sessions_until_long_break", "1").is_err());
        assert!(config.set("timer.short_break_minutes", "-3").is_err());
        assert!(config.set("sound.muted", "maybe").is_err());
        assert!(config.set("sound.backend", "speaker").is_err());
        assert!(config.set("timer.focus_minutes", "100000").is_err());
        assert!(config.set("timer.sessions_until_long_break", "1000").is_err());
        assert!(config.set("sound.volume", "101").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        let err = config.set("timer.snooze", "5").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }
}
