//! Display helpers derived from timer state.
//!
//! These are presentation derivations; the engine never calls them.

use chrono::Duration;

/// Format seconds as MM:SS. Minutes are not wrapped at 60.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Percentage of a phase already elapsed, 0.0 to 100.0.
#[must_use]
pub fn progress_percent(duration: u32, remaining: u32) -> f64 {
    if duration == 0 {
        return 100.0;
    }
    let elapsed = duration.saturating_sub(remaining);
    f64::from(elapsed) / f64::from(duration) * 100.0
}

/// Format a span as a compact string like "1h 05m" or "12m".
#[must_use]
pub fn format_span(d: Duration) -> String {
    let total_minutes = d.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}

/// Format a count of minutes for humans.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(6000), "100:00");
    }

    #[test]
    fn test_progress_percent() {
        assert!((progress_percent(1500, 1500) - 0.0).abs() < f64::EPSILON);
        assert!((progress_percent(300, 150) - 50.0).abs() < f64::EPSILON);
        assert!((progress_percent(300, 0) - 100.0).abs() < f64::EPSILON);
        assert!((progress_percent(0, 0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_span() {
        assert_eq!(format_span(Duration::minutes(0)), "0m");
        assert_eq!(format_span(Duration::minutes(25)), "25m");
        assert_eq!(format_span(Duration::minutes(65)), "1h 05m");
        assert_eq!(format_span(Duration::seconds(-30)), "0m");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(25), "25 minutes");
    }
}
