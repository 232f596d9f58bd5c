//! Output formatting for focusflow.
//!
//! This module provides formatters for displaying command results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FocusFlowError;
use crate::features::simulate::SimulationReport;

pub use json::*;
pub use pretty::*;

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns `FocusFlowError::Json` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    path: &std::path::Path,
    format: OutputFormat,
) -> Result<String, FocusFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}

/// Format a simulation report based on output format
///
/// # Errors
///
/// Returns `FocusFlowError::Json` if JSON serialization fails.
pub fn format_simulation(
    report: &SimulationReport,
    format: OutputFormat,
) -> Result<String, FocusFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(report)),
        OutputFormat::Json => format_simulation_json(report),
    }
}
