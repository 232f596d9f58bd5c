//! Application state for the TUI.

use crate::features::focus::display::format_minutes;
use crate::features::focus::{EngineEvent, Phase, TimerEngine};
use crate::tui::editor::SettingsEditor;

/// Key help shown in the status bar.
pub const HELP: &str =
    "space:start/pause | r:reset | 1/2/3:phase | s:settings | m:mute | a:auto | x:clear stats | q:quit";

/// Application state.
pub struct App {
    /// The timer being displayed.
    pub engine: TimerEngine,
    /// Open settings dialog, if any.
    pub editor: Option<SettingsEditor>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance around an engine.
    #[must_use]
    pub fn new(engine: TimerEngine) -> Self {
        Self {
            engine,
            editor: None,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Deliver due ticks and deferred starts, and surface what happened.
    pub fn update(&mut self) {
        self.engine.pump();
        self.absorb_events();
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.engine.toggle();
        self.absorb_events();
    }

    /// Rewind the current phase.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.absorb_events();
    }

    /// Switch to a phase, refusing while the countdown runs.
    pub fn switch_phase(&mut self, phase: Phase) {
        if !self.engine.switch_phase(phase) {
            self.status = Some("Pause the timer before switching phases".to_string());
        }
        self.absorb_events();
    }

    /// Toggle sound requests.
    pub fn toggle_mute(&mut self) {
        let muted = !self.engine.state().muted;
        self.engine.set_muted(muted);
        self.status = Some(if muted { "Sound muted" } else { "Sound on" }.to_string());
    }

    /// Toggle automatic start of the next phase.
    pub fn toggle_auto_advance(&mut self) {
        let auto = !self.engine.state().auto_advance;
        self.engine.set_auto_advance(auto);
        self.absorb_events();
        self.status = Some(if auto { "Auto-advance on" } else { "Auto-advance off" }.to_string());
    }

    /// Clear the session counters.
    pub fn reset_statistics(&mut self) {
        self.engine.reset_statistics();
        self.absorb_events();
    }

    /// Open the settings dialog on the settings in effect.
    pub fn open_settings(&mut self) {
        self.editor = Some(SettingsEditor::new(self.engine.settings()));
        self.status = Some(
            "Up/Down: field | Left/Right or -/+: adjust | digits: type | Enter: apply | Esc: cancel"
                .to_string(),
        );
    }

    /// Close the settings dialog without applying.
    pub fn cancel_settings(&mut self) {
        self.editor = None;
        self.status = Some("Settings unchanged".to_string());
    }

    /// Apply the dialog's settings and close it.
    pub fn apply_settings(&mut self) {
        if let Some(editor) = self.editor.take() {
            self.engine.apply_settings(editor.settings());
            self.absorb_events();
        }
    }

    /// Focus completions left before the next long break.
    #[must_use]
    pub const fn sessions_until_long_break(&self) -> u32 {
        self.engine.sessions_until_long_break()
    }

    fn absorb_events(&mut self) {
        for event in self.engine.drain_events() {
            if let Some(message) = self.describe(event) {
                self.status = Some(message);
            }
        }
    }

    fn describe(&self, event: EngineEvent) -> Option<String> {
        let settings = self.engine.settings();
        match event {
            EngineEvent::Started { phase } => Some(format!("{phase} started")),
            EngineEvent::Paused { phase } => Some(format!("{phase} paused")),
            EngineEvent::Reset { phase } => Some(format!("{phase} reset")),
            EngineEvent::PhaseSwitched { phase } => Some(format!("Switched to {phase}")),
            EngineEvent::Completed { finished, next, .. } => Some(match finished {
                Phase::Focus => format!(
                    "Focus complete! Time for a {}-minute {}.",
                    settings.minutes_for(next),
                    next.display_name().to_lowercase()
                ),
                Phase::ShortBreak | Phase::LongBreak => format!(
                    "Break is over! Next up: {} of focus.",
                    format_minutes(settings.focus_minutes())
                ),
            }),
            EngineEvent::AutoStartScheduled => Some("Next phase starts in 2 seconds...".to_string()),
            EngineEvent::AutoStarted => None,
            EngineEvent::AutoStartCancelled => Some("Auto-start cancelled".to_string()),
            EngineEvent::SettingsApplied => Some("Settings applied".to_string()),
            EngineEvent::StatisticsReset => Some("Statistics cleared".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::focus::{ManualClock, RecordingPlayer, Settings, Timeline};

    fn app() -> (App, ManualClock) {
        let clock = ManualClock::new();
        let engine = TimerEngine::new(
            Settings::clamped(1, 1, 1, 2),
            Box::new(Timeline::new(clock.clone())),
            Box::new(RecordingPlayer::new()),
        );
        (App::new(engine), clock)
    }

    #[test]
    fn test_switch_while_running_sets_status() {
        let (mut app, _clock) = app();
        app.toggle();
        app.switch_phase(Phase::LongBreak);
        assert_eq!(app.engine.state().phase, Phase::Focus);
        assert_eq!(
            app.status.as_deref(),
            Some("Pause the timer before switching phases")
        );
    }

    #[test]
    fn test_update_reports_completion() {
        let (mut app, clock) = app();
        app.toggle();
        for _ in 0..60 {
            clock.advance(Duration::from_secs(1));
            app.update();
        }
        assert_eq!(app.engine.state().phase, Phase::ShortBreak);
        assert_eq!(
            app.status.as_deref(),
            Some("Focus complete! Time for a 1-minute short break.")
        );
    }

    #[test]
    fn test_settings_dialog_apply_and_cancel() {
        let (mut app, _clock) = app();
        app.open_settings();
        if let Some(editor) = app.editor.as_mut() {
            editor.push_digit(0);
        }
        app.apply_settings();
        assert!(app.editor.is_none());
        assert_eq!(app.engine.settings().focus_minutes(), 10);
        assert_eq!(app.engine.state().remaining_seconds, 600);

        app.open_settings();
        app.cancel_settings();
        assert_eq!(app.engine.settings().focus_minutes(), 10);
    }

    #[test]
    fn test_toggles() {
        let (mut app, _clock) = app();
        app.toggle_mute();
        assert!(app.engine.state().muted);
        app.toggle_auto_advance();
        assert!(app.engine.state().auto_advance);
        assert_eq!(app.status.as_deref(), Some("Auto-advance on"));
    }
}
