use colored::Colorize;

use crate::config::Config;
use crate::features::focus::display::{format_minutes, format_mmss};
use crate::features::focus::Phase;
use crate::features::simulate::SimulationReport;

/// Format the configuration as a readable listing.
pub fn format_config_pretty(config: &Config, path: &std::path::Path) -> String {
    let mut lines = Vec::new();

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, showing defaults)", path.display())
    };
    lines.push(format!("{} {}", "Config:".bold(), source.dimmed()));
    lines.push("─".repeat(50));

    let timer = &config.timer;
    lines.push("Timer".cyan().bold().to_string());
    lines.push(format!("  Focus:              {}", format_minutes(timer.focus_minutes)));
    lines.push(format!("  Short break:        {}", format_minutes(timer.short_break_minutes)));
    lines.push(format!("  Long break:         {}", format_minutes(timer.long_break_minutes)));
    lines.push(format!(
        "  Long break every:   {} sessions",
        timer.sessions_until_long_break
    ));
    lines.push(format!("  Auto-advance:       {}", on_off(timer.auto_advance)));

    let sound = &config.sound;
    lines.push("Sound".cyan().bold().to_string());
    lines.push(format!("  Muted:              {}", on_off(sound.muted)));
    lines.push(format!("  Backend:            {}", lowercase_debug(&sound.backend)));
    lines.push(format!("  Volume:             {}%", sound.volume));
    for (name, file) in [
        ("start", &sound.files.start),
        ("stop", &sound.files.stop),
        ("time_up", &sound.files.time_up),
    ] {
        if let Some(file) = file {
            let label = format!("File ({name}):");
            lines.push(format!("  {label:<20}{}", file.display()));
        }
    }

    lines.push("General".cyan().bold().to_string());
    lines.push(format!(
        "  Default output:     {}",
        lowercase_debug(&config.general.default_output)
    ));
    lines.push(format!(
        "  Color:              {}",
        lowercase_debug(&config.general.color)
    ));

    lines.join("\n")
}

/// Format a simulation report as a timeline.
pub fn format_simulation_pretty(report: &SimulationReport) -> String {
    let settings = &report.settings;
    let mut lines = vec![
        format!(
            "{} {}m focus / {}m short / {}m long, long break every {}",
            "Simulation:".bold(),
            settings.focus_minutes(),
            settings.short_break_minutes(),
            settings.long_break_minutes(),
            settings.sessions_until_long_break()
        ),
        "─".repeat(50),
    ];

    if report.completions.is_empty() {
        lines.push("  No phases completed".dimmed().to_string());
        return lines.join("\n");
    }

    for c in &report.completions {
        let finished = match c.finished {
            Phase::Focus => c.finished.display_name().red(),
            Phase::ShortBreak | Phase::LongBreak => c.finished.display_name().green(),
        };
        let next = match c.next {
            Phase::LongBreak => c.next.display_name().yellow().bold(),
            _ => c.next.display_name().normal(),
        };
        lines.push(format!(
            "{:>3}. {}  {:<12} → {:<12} sessions: {}",
            c.index,
            elapsed_label(c.elapsed_seconds).dimmed(),
            finished,
            next,
            c.completed_focus_sessions
        ));
    }

    lines.push("─".repeat(50));
    lines.push(format!(
        "Elapsed: {}   Focused: {}   Sounds: {} start, {} stop, {} time-up",
        elapsed_label(report.elapsed_seconds),
        elapsed_label(report.focused_seconds),
        report.sounds.start,
        report.sounds.stop,
        report.sounds.time_up
    ));

    lines.join("\n")
}

fn elapsed_label(seconds: u64) -> String {
    let hours = seconds / 3600;
    let rest = u32::try_from(seconds % 3600).unwrap_or(0);
    if hours > 0 {
        format!("{hours}:{}", format_mmss(rest))
    } else {
        format_mmss(rest)
    }
}

fn lowercase_debug(value: &impl std::fmt::Debug) -> String {
    format!("{value:?}").to_lowercase()
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::Settings;
    use crate::features::simulate::simulate;

    #[test]
    fn test_config_pretty_lists_values() {
        colored::control::set_override(false);
        let mut config = Config::default();
        config.sound.volume = 40;
        let output = format_config_pretty(&config, std::path::Path::new("/nonexistent/config.yaml"));

        assert!(output.contains("not created"));
        assert!(output.contains("Focus:              25 minutes"));
        assert!(output.contains("Long break every:   4 sessions"));
        assert!(output.contains("Volume:             40%"));
        assert!(output.contains("Backend:            bell"));
    }

    #[test]
    fn test_simulation_pretty_timeline() {
        colored::control::set_override(false);
        let report = simulate(Settings::clamped(1, 1, 1, 2), 4);
        let output = format_simulation_pretty(&report);

        assert!(output.contains("1m focus / 1m short / 1m long, long break every 2"));
        assert!(output.contains("Long Break"));
        assert!(output.contains("Sounds: 4 start, 0 stop, 4 time-up"));
    }

    #[test]
    fn test_elapsed_label() {
        assert_eq!(elapsed_label(59), "00:59");
        assert_eq!(elapsed_label(3725), "1:02:05");
    }
}
