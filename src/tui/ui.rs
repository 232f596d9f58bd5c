//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::features::focus::display::{format_mmss, format_span, progress_percent};
use crate::features::focus::Phase;
use crate::tui::app::App;
use crate::tui::editor::{Field, SettingsEditor};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: tabs, clock, gauge, stats, quote, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Phase tabs
            Constraint::Min(5),    // Clock
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Stats
            Constraint::Length(1), // Quote
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_clock(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_quote(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);

    if let Some(ref editor) = app.editor {
        render_settings(frame, editor);
    }
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Focus => Color::Red,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Blue,
    }
}

/// Render the phase selector.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.engine.state();
    let titles: Vec<Line<'_>> = Phase::ALL
        .iter()
        .map(|phase| Line::from(format!(" {} {} ", phase.index() + 1, phase.display_name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.phase.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(phase_color(state.phase))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" focusflow ")
                .border_style(Style::default().fg(phase_color(state.phase))),
        );

    frame.render_widget(tabs, area);
}

/// Render the countdown and run state.
fn render_clock(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.engine.state();
    let color = phase_color(state.phase);

    let run_state = if app.engine.auto_start_pending() {
        Span::styled("Starting next phase...", Style::default().fg(Color::Yellow))
    } else if state.running {
        Span::styled("Running", Style::default().fg(Color::Green))
    } else {
        Span::styled("Paused", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_mmss(state.remaining_seconds),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.phase.tagline(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(run_state),
    ];

    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(clock, area);
}

/// Render the phase progress bar.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.engine.state();
    let percent = progress_percent(
        app.engine.duration_for(state.phase),
        state.remaining_seconds,
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(state.phase)))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));

    frame.render_widget(gauge, area);
}

/// Render the session counters and toggles.
fn render_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.engine.state();
    let focused = chrono::Duration::seconds(i64::try_from(state.focused_seconds).unwrap_or(i64::MAX));

    let long_break = if state.long_break_due {
        Span::styled("Long break due", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(format!("Long break in {}", app.sessions_until_long_break()))
    };

    let flag = |label: &'static str, on: bool| {
        Span::styled(
            label,
            if on {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )
    };

    let stats = Line::from(vec![
        Span::raw(format!(" Sessions: {}", state.completed_focus_sessions)),
        Span::raw(" | "),
        long_break,
        Span::raw(" | "),
        Span::raw(format!("Focused: {}", format_span(focused))),
        Span::raw(" | "),
        flag("muted", state.muted),
        Span::raw(" "),
        flag("auto", state.auto_advance),
    ]);

    frame.render_widget(Paragraph::new(stats).alignment(Alignment::Center), area);
}

fn render_quote(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let quote = Paragraph::new(Span::styled(
        format!("\"{}\"", app.engine.state().phase.quote()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(quote, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = app.status.as_deref().unwrap_or("");
    let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

/// Render the settings dialog over the timer.
fn render_settings(frame: &mut Frame<'_>, editor: &SettingsEditor) {
    let area = centered_rect(50, 8, frame.area());

    let items: Vec<ListItem<'_>> = Field::ALL
        .iter()
        .map(|&field| {
            let selected = field == editor.selected_field();
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(if selected { "> " } else { "  " }),
                Span::raw(format!("{:<30}", field.label())),
                Span::raw(format!("{:>4}", editor.value(field))),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

/// A rectangle of `width` percent and `height` rows centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::features::focus::{ManualClock, RecordingPlayer, Settings, TimerEngine, Timeline};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(TimerEngine::new(
            Settings::default(),
            Box::new(Timeline::new(ManualClock::new())),
            Box::new(RecordingPlayer::new()),
        ))
    }

    #[test]
    fn test_render_shows_countdown() {
        let output = rendered(&app());
        assert!(output.contains("25:00"));
        assert!(output.contains("Stay focused"));
        assert!(output.contains("Paused"));
        assert!(output.contains("Long break in 4"));
    }

    #[test]
    fn test_render_settings_dialog() {
        let mut app = app();
        app.open_settings();
        let output = rendered(&app);
        assert!(output.contains("Settings"));
        assert!(output.contains("Short break (minutes)"));
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 8, area);
        assert_eq!(popup.height, 8);
        assert_eq!(popup.width, 50);
    }
}
