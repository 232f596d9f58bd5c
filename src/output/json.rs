//! JSON output formatting for focusflow.

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::FocusFlowError;
use crate::features::simulate::SimulationReport;

/// Format the configuration as JSON, with the file it came from.
///
/// # Errors
///
/// Returns `FocusFlowError::Json` if serialization fails.
pub fn format_config_json(config: &Config, path: &std::path::Path) -> Result<String, FocusFlowError> {
    let output = json!({
        "path": path.display().to_string(),
        "exists": path.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a simulation report as JSON.
///
/// # Errors
///
/// Returns `FocusFlowError::Json` if serialization fails.
pub fn format_simulation_json(report: &SimulationReport) -> Result<String, FocusFlowError> {
    to_json(report)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `FocusFlowError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusFlowError> {
    Ok(serde_json::to_string_pretty(value)?)
}
