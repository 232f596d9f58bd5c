//! Logging setup.
//!
//! Logs go to `~/.focusflow/focusflow.log` because the TUI owns the terminal.
//! Set `FOCUSFLOW_LOG` to an `EnvFilter` directive (e.g. `focusflow=debug`)
//! to change the level; the default is `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "FOCUSFLOW_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Falls back to stderr (warnings only by default) when the log file cannot
/// be opened, unless `interactive` is set, in which case logging is disabled
/// so the terminal UI is not overwritten.
pub fn init(paths: &Paths, interactive: bool) {
    let file = paths.ensure_dirs().ok().and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.log_file)
            .ok()
    });

    let result = match file {
        Some(file) => tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_env_filter(filter("info"))
            .try_init(),
        None if interactive => return,
        None => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter("warn"))
            .try_init(),
    };

    match result {
        Ok(()) => tracing::debug!(log_file = %paths.log_file.display(), "logging initialized"),
        // Can't use tracing here since no subscriber was installed
        Err(e) => eprintln!("Failed to initialize logging: {e}"),
    }
}
