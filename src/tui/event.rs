//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusFlowError;
use crate::features::focus::Phase;
use crate::tui::app::{App, HELP};
use crate::tui::editor::SettingsEditor;

/// How long to wait for input before returning to the loop.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle terminal events.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<(), FocusFlowError> {
    // Poll for events with a small timeout
    if event::poll(POLL_TIMEOUT).map_err(|e| FocusFlowError::terminal("Event poll failed", e))? {
        if let Event::Key(key) =
            event::read().map_err(|e| FocusFlowError::terminal("Event read failed", e))?
        {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}

/// Apply one key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if let Some(editor) = app.editor.as_mut() {
        match key.code {
            KeyCode::Enter => app.apply_settings(),
            KeyCode::Esc => app.cancel_settings(),
            code => edit(editor, code),
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('1') => app.switch_phase(Phase::Focus),
        KeyCode::Char('2') => app.switch_phase(Phase::ShortBreak),
        KeyCode::Char('3') => app.switch_phase(Phase::LongBreak),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('m') => app.toggle_mute(),
        KeyCode::Char('a') => app.toggle_auto_advance(),
        KeyCode::Char('x') => app.reset_statistics(),
        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => {}
    }
}

fn edit(editor: &mut SettingsEditor, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => editor.select_previous(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => editor.select_next(),
        KeyCode::Left | KeyCode::Char('-') => editor.decrement(),
        KeyCode::Right | KeyCode::Char('+' | '=') => editor.increment(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                editor.push_digit(digit);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{ManualClock, RecordingPlayer, Settings, TimerEngine, Timeline};

    fn app() -> App {
        App::new(TimerEngine::new(
            Settings::default(),
            Box::new(Timeline::new(ManualClock::new())),
            Box::new(RecordingPlayer::new()),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_space_toggles_running() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.engine.state().running);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.engine.state().running);
    }

    #[test]
    fn test_number_keys_switch_phase() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.state().phase, Phase::LongBreak);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine.state().phase, Phase::ShortBreak);
    }

    #[test]
    fn test_settings_dialog_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.editor.is_some());

        // Digits go to the editor, not the phase switcher.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(app.editor.is_none());
        assert_eq!(app.engine.state().phase, Phase::Focus);
        assert_eq!(app.engine.settings().short_break_minutes(), 4);
    }

    #[test]
    fn test_escape_closes_dialog_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Esc);
        assert!(app.editor.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
