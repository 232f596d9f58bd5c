//! Settings dialog state.
//!
//! The editor holds raw draft values that may be out of range while the user
//! types. [`SettingsEditor::settings`] clamps them, so the engine only ever
//! receives valid settings.

use crate::features::focus::settings::MAX_MINUTES;
use crate::features::focus::Settings;

/// Largest value the editor accepts for any field.
pub const MAX_FIELD_VALUE: u32 = MAX_MINUTES;

/// A field in the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Focus minutes.
    Focus,
    /// Short break minutes.
    ShortBreak,
    /// Long break minutes.
    LongBreak,
    /// Sessions until long break.
    SessionsUntilLongBreak,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [
        Self::Focus,
        Self::ShortBreak,
        Self::LongBreak,
        Self::SessionsUntilLongBreak,
    ];

    /// Label shown in the dialog.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus (minutes)",
            Self::ShortBreak => "Short break (minutes)",
            Self::LongBreak => "Long break (minutes)",
            Self::SessionsUntilLongBreak => "Long break every (sessions)",
        }
    }
}

/// Draft settings being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    values: [u32; 4],
    /// Index of the highlighted field.
    pub selected: usize,
}

impl SettingsEditor {
    /// Start editing from the settings currently in effect.
    #[must_use]
    pub const fn new(current: &Settings) -> Self {
        Self {
            values: [
                current.focus_minutes(),
                current.short_break_minutes(),
                current.long_break_minutes(),
                current.sessions_until_long_break(),
            ],
            selected: 0,
        }
    }

    /// Draft value for a field.
    #[must_use]
    pub const fn value(&self, field: Field) -> u32 {
        self.values[field as usize]
    }

    /// The highlighted field.
    #[must_use]
    pub const fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// Move the highlight down, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    /// Move the highlight up, wrapping.
    pub fn select_previous(&mut self) {
        self.selected = (self.selected + Field::ALL.len() - 1) % Field::ALL.len();
    }

    /// Add one to the highlighted field.
    pub fn increment(&mut self) {
        let value = &mut self.values[self.selected];
        *value = (*value + 1).min(MAX_FIELD_VALUE);
    }

    /// Subtract one from the highlighted field.
    pub fn decrement(&mut self) {
        let value = &mut self.values[self.selected];
        *value = value.saturating_sub(1);
    }

    /// Append a typed digit to the highlighted field.
    pub fn push_digit(&mut self, digit: u32) {
        let value = &mut self.values[self.selected];
        let next = value.saturating_mul(10).saturating_add(digit);
        if next <= MAX_FIELD_VALUE {
            *value = next;
        }
    }

    /// Remove the last digit of the highlighted field.
    pub fn backspace(&mut self) {
        self.values[self.selected] /= 10;
    }

    /// Validated settings from the drafts: zeros become 1 and the long-break
    /// period is at least 2.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::clamped(
            self.values[0],
            self.values[1],
            self.values[2],
            self.values[3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_starts_from_current() {
        let editor = SettingsEditor::new(&Settings::default());
        assert_eq!(editor.value(Field::Focus), 25);
        assert_eq!(editor.value(Field::SessionsUntilLongBreak), 4);
        assert_eq!(editor.selected_field(), Field::Focus);
    }

    #[test]
    fn test_selection_wraps() {
        let mut editor = SettingsEditor::new(&Settings::default());
        editor.select_previous();
        assert_eq!(editor.selected_field(), Field::SessionsUntilLongBreak);
        editor.select_next();
        assert_eq!(editor.selected_field(), Field::Focus);
    }

    #[test]
    fn test_typing_digits() {
        let mut editor = SettingsEditor::new(&Settings::default());
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.value(Field::Focus), 0);
        editor.push_digit(5);
        editor.push_digit(0);
        assert_eq!(editor.value(Field::Focus), 50);
        editor.push_digit(0);
        editor.push_digit(0);
        assert_eq!(editor.value(Field::Focus), 500);
    }

    #[test]
    fn test_increment_and_decrement_bounds() {
        let mut editor = SettingsEditor::new(&Settings::clamped(1, 1, 1, 2));
        editor.decrement();
        editor.decrement();
        assert_eq!(editor.value(Field::Focus), 0);

        for _ in 0..1200 {
            editor.increment();
        }
        assert_eq!(editor.value(Field::Focus), MAX_FIELD_VALUE);
    }

    #[test]
    fn test_settings_are_clamped() {
        let mut editor = SettingsEditor::new(&Settings::default());
        editor.backspace();
        editor.backspace();
        editor.select_previous();
        editor.backspace();

        let settings = editor.settings();
        assert_eq!(settings.focus_minutes(), 1);
        assert_eq!(settings.sessions_until_long_break(), 2);
        assert_eq!(settings.short_break_minutes(), 5);
    }
}
