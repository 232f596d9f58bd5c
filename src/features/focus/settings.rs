//! Timer settings.
//!
//! A [`Settings`] value is always valid: every constructor clamps its input
//! into `MIN..=MAX`, so the engine can apply one without checking it.

use serde::Serialize;

use super::phase::Phase;

/// Default focus length in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default short break length in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break length in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
/// Default number of focus sessions before a long break.
pub const DEFAULT_SESSIONS_UNTIL_LONG_BREAK: u32 = 4;

/// Smallest accepted duration, in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Smallest accepted long-break period.
pub const MIN_SESSIONS_UNTIL_LONG_BREAK: u32 = 2;
/// Largest accepted duration, in minutes.
pub const MAX_MINUTES: u32 = 999;
/// Largest accepted long-break period.
pub const MAX_SESSIONS_UNTIL_LONG_BREAK: u32 = 999;

/// Durations and long-break period for one timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    focus_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
    sessions_until_long_break: u32,
}

impl Settings {
    /// Build settings, moving any out-of-range value to the nearest bound.
    #[must_use]
    pub fn clamped(
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        sessions_until_long_break: u32,
    ) -> Self {
        Self {
            focus_minutes: focus_minutes.clamp(MIN_MINUTES, MAX_MINUTES),
            short_break_minutes: short_break_minutes.clamp(MIN_MINUTES, MAX_MINUTES),
            long_break_minutes: long_break_minutes.clamp(MIN_MINUTES, MAX_MINUTES),
            sessions_until_long_break: sessions_until_long_break
                .clamp(MIN_SESSIONS_UNTIL_LONG_BREAK, MAX_SESSIONS_UNTIL_LONG_BREAK),
        }
    }

    /// Focus length in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Short break length in minutes.
    #[must_use]
    pub const fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    /// Long break length in minutes.
    #[must_use]
    pub const fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    /// Number of completed focus sessions between long breaks.
    #[must_use]
    pub const fn sessions_until_long_break(&self) -> u32 {
        self.sessions_until_long_break
    }

    /// Minutes configured for a phase.
    #[must_use]
    pub const fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Total length of a phase in seconds.
    #[must_use]
    pub const fn duration_for(&self, phase: Phase) -> u32 {
        self.minutes_for(phase) * 60
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            sessions_until_long_break: DEFAULT_SESSIONS_UNTIL_LONG_BREAK,
        }
    }
}
