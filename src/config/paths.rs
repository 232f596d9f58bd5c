//! Path resolution for focusflow configuration and log files.
//!
//! All focusflow files live in `~/.focusflow/`:
//! - `config.yaml` - Configuration file
//! - `focusflow.log` - Log output (the TUI owns the terminal)

use std::path::PathBuf;

use crate::error::FocusFlowError;

/// Paths to focusflow files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focusflow/`
    pub root: PathBuf,
    /// Config file: `~/.focusflow/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.focusflow/focusflow.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocusFlowError> {
        let home = std::env::var("HOME").map_err(|_| {
            FocusFlowError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focusflow")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("focusflow.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusFlowError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocusFlowError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-focusflow");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("focusflow.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".focusflow"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op.
        paths.ensure_dirs().unwrap();
    }
}
