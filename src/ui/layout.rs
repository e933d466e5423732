//! Layout components (header, content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::ViewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Title, subtitle and a blank separator line
pub const HEADER_HEIGHT: u16 = 3;

const STATUS_BAR_HEIGHT: u16 = 1;

/// Top and bottom border of the form block
const FORM_BORDER_HEIGHT: u16 = 2;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header
            Constraint::Min(0),                    // Form
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Number of form rows visible for a terminal of `terminal_height` lines
pub fn form_viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT + FORM_BORDER_HEIGHT)
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Job Application",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Fill out the form below to apply for the available position",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ]);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if app.config.show_help_bar() {
        spans.push(Span::styled(
            get_view_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.status_message {
        if spans.len() > 1 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.form.view_state() {
        ViewState::Submitted => "Enter/Esc:close".to_string(),
        ViewState::Editing if app.state.is_submit_focused() => {
            format!("Tab:next  Enter/{SUBMIT_SHORTCUT}:submit  wheel:scroll")
        }
        ViewState::Editing => format!("Tab/↑↓:next  ←→:choose  {SUBMIT_SHORTCUT}:submit"),
    }
}
