//! Config command implementation.
//!
//! Shows, edits, and resets `~/.focusflow/config.yaml`.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocusFlowError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or the
/// key/value pair is invalid.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, FocusFlowError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, &paths.config_file, format)
        }

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "path": paths.config_file.display().to_string(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },

        ConfigCommands::Set { key, value } => set_value(paths, &key, &value, format),

        ConfigCommands::Reset => {
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            tracing::info!(path = %paths.config_file.display(), "config reset to defaults");
            match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "reset": true })),
                OutputFormat::Pretty => Ok("Configuration reset to defaults".green().to_string()),
            }
        }
    }
}

fn set_value(
    paths: &Paths,
    key: &str,
    value: &str,
    format: OutputFormat,
) -> Result<String, FocusFlowError> {
    let mut config = Config::load_from_path(&paths.config_file).map_err(|e| {
        FocusFlowError::Config(format!(
            "{e}. Fix the file or run 'focusflow config reset' first"
        ))
    })?;
    config.set(key, value)?;

    paths.ensure_dirs()?;
    config.save_to_path(&paths.config_file)?;
    tracing::info!(key, value, "config value set");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "key": key, "value": value })),
        OutputFormat::Pretty => Ok(format!("{} {key} = {value}", "Set".green())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, Paths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".focusflow"));
        (temp_dir, paths)
    }

    #[test]
    fn test_set_then_show() {
        let (_dir, paths) = temp_paths();
        config(
            &paths,
            ConfigCommands::Set {
                key: "timer.long_break_minutes".to_string(),
                value: "20".to_string(),
            },
            OutputFormat::Pretty,
        )
        .unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.timer.long_break_minutes, 20);

        let shown = config(&paths, ConfigCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["config"]["timer"]["long_break_minutes"], 20);
        assert_eq!(value["exists"], true);
    }

    #[test]
    fn test_invalid_set_leaves_file_untouched() {
        let (_dir, paths) = temp_paths();
        let result = config(
            &paths,
            ConfigCommands::Set {
                key: "timer.focus_minutes".to_string(),
                value: "0".to_string(),
            },
            OutputFormat::Pretty,
        );
        assert!(result.is_err());
        assert!(!paths.config_file.exists());
    }

    #[test]
    fn test_reset_writes_defaults() {
        let (_dir, paths) = temp_paths();
        config(&paths, ConfigCommands::Reset, OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_reset_repairs_broken_file() {
        let (_dir, paths) = temp_paths();
        paths.ensure_dirs().unwrap();
        std::fs::write(&paths.config_file, "timer: [broken").unwrap();

        let err = config(
            &paths,
            ConfigCommands::Set {
                key: "timer.focus_minutes".to_string(),
                value: "30".to_string(),
            },
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(err.to_string().contains("config reset"));

        config(&paths, ConfigCommands::Reset, OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_path_output() {
        let (_dir, paths) = temp_paths();
        let out = config(&paths, ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert!(out.ends_with("config.yaml"));
    }
}
