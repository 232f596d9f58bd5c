//! Simulate command implementation.

use crate::cli::args::{OutputFormat, SimulateArgs};
use crate::config::Config;
use crate::error::FocusFlowError;
use crate::features::simulate::simulate as run_simulation;
use crate::output::format_simulation;

/// Run a headless simulation with configured durations and flag overrides.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn simulate(
    config: &Config,
    args: SimulateArgs,
    format: OutputFormat,
) -> Result<String, FocusFlowError> {
    let settings = args.durations.apply(&config.timer).settings();
    tracing::debug!(phases = args.phases, ?settings, "running simulation");
    let report = run_simulation(settings, args.phases);
    format_simulation(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::DurationArgs;

    #[test]
    fn test_simulate_uses_overrides() {
        let args = SimulateArgs {
            phases: 2,
            durations: DurationArgs {
                focus: Some(2),
                short: Some(1),
                ..DurationArgs::default()
            },
        };
        let out = simulate(&Config::default(), args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["settings"]["focus_minutes"], 2);
        assert_eq!(value["settings"]["long_break_minutes"], 15);
        assert_eq!(value["completions"][0]["elapsed_seconds"], 120);
        // 120 focus + 2 delay + 60 short break
        assert_eq!(value["elapsed_seconds"], 182);
    }
}
