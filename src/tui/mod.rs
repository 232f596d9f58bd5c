//! Terminal User Interface (TUI) for focusflow.
//!
//! Shows the countdown for the current phase and drives the timer engine
//! from the keyboard. Built with ratatui and crossterm.

mod app;
mod editor;
mod event;
mod ui;

pub use app::App;
pub use editor::{Field, SettingsEditor};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::FocusFlowError;
use crate::features::focus::{player_for, SystemClock, TimerEngine, Timeline};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, args: RunArgs) -> Result<(), FocusFlowError> {
    let timer = args.durations.apply(&config.timer);
    let player = player_for(
        config.sound.backend,
        &config.sound.files,
        config.sound.volume,
    );
    let mut engine = TimerEngine::new(
        timer.settings(),
        Box::new(Timeline::new(SystemClock::new())),
        player,
    );
    engine.set_muted(args.muted || config.sound.muted);
    engine.set_auto_advance(args.auto_advance || timer.auto_advance);
    engine.drain_events();
    info!(settings = ?engine.settings(), "starting timer");

    // Setup terminal
    enable_raw_mode().map_err(|e| FocusFlowError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocusFlowError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusFlowError::terminal("Failed to create terminal", e))?;

    // Create app state and run main loop
    let mut app = App::new(engine);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let state = app.engine.state();
    info!(
        completed_focus_sessions = state.completed_focus_sessions,
        focused_seconds = state.focused_seconds,
        "timer closed"
    );

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FocusFlowError> {
    while !app.should_quit {
        app.update();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusFlowError::terminal("Failed to draw", e))?;

        // Handle events
        event::handle_events(app)?;
    }

    Ok(())
}
