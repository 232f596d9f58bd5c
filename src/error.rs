//! Error types for focusflow.
//!
//! The timer engine itself never fails; these errors cover the shell around
//! it: configuration files, the terminal, and command-line input.

use thiserror::Error;

/// Errors surfaced by focusflow commands.
#[derive(Debug, Error)]
pub enum FocusFlowError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A command-line value was out of range or unrecognized.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file is not valid YAML for this schema.
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FocusFlowError {
    /// Wrap a terminal backend failure with a short description of the step.
    pub fn terminal(step: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{step}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FocusFlowError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");

        let err = FocusFlowError::terminal("Failed to draw", "broken pipe");
        assert_eq!(err.to_string(), "Terminal error: Failed to draw: broken pipe");
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml = serde_yaml::from_str::<u32>("[broken").unwrap_err();
        let err: FocusFlowError = yaml.into();
        assert!(matches!(err, FocusFlowError::Yaml(_)));
        assert!(err.to_string().starts_with("Invalid config YAML:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FocusFlowError = io.into();
        assert!(matches!(err, FocusFlowError::Io(_)));
    }
}
