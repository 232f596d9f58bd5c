//! Timer phases.
//!
//! A cycle alternates between focus and break phases; every Nth break is a
//! long one.

use serde::{Deserialize, Serialize};

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Work interval (a "pomodoro").
    #[default]
    Focus,
    /// Rest between focus intervals.
    ShortBreak,
    /// Longer rest after every N focus intervals.
    LongBreak,
}

impl Phase {
    /// All phases in tab order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Short line shown under the countdown.
    #[must_use]
    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::Focus => "Stay focused",
            Self::ShortBreak | Self::LongBreak => "Take a breather",
        }
    }

    /// Motivational quote shown at the bottom of the timer.
    #[must_use]
    pub const fn quote(&self) -> &'static str {
        match self {
            Self::Focus => "Focus now, reward later",
            Self::ShortBreak => "Relax... your brain needs it",
            Self::LongBreak => "You earned this one. Step away for a while",
        }
    }

    /// Position of this phase in [`Phase::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Focus => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
