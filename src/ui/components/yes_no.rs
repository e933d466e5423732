//! Binary-choice input presenting "Yes" and "No"

use super::button::{render_button_to_buffer, BUTTON_HEIGHT};
use crate::state::YesNo;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};

/// Height of the selector including its message line
pub const YES_NO_HEIGHT: u16 = BUTTON_HEIGHT + 1;

/// Stateless yes/no selector.
///
/// Holds only what it renders; answers are reported through the callback
/// passed to [`YesNoSelector::handle_key`].
#[derive(Debug, Clone, Copy)]
pub struct YesNoSelector<'a> {
    value: Option<YesNo>,
    error: Option<&'a str>,
    focused: bool,
}

impl<'a> YesNoSelector<'a> {
    pub fn new(value: Option<YesNo>) -> Self {
        Self {
            value,
            error: None,
            focused: false,
        }
    }

    /// Message rendered beneath the buttons
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Map a key to the option it activates
    pub fn choice_for_key(key: &KeyEvent) -> Option<YesNo> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Left => Some(YesNo::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => Some(YesNo::No),
            _ => None,
        }
    }

    /// Invoke `on_change` with `"Yes"` or `"No"` once if `key` activates an
    /// option.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&self, key: &KeyEvent, on_change: impl FnOnce(&'static str)) -> bool {
        match Self::choice_for_key(key) {
            Some(choice) => {
                on_change(choice.as_str());
                true
            }
            None => false,
        }
    }
}

impl Widget for YesNoSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(BUTTON_HEIGHT), Constraint::Length(1)])
            .split(area);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(rows[0]);

        for (choice, button_area, accent, mark) in [
            (YesNo::Yes, buttons[0], Color::Green, "✓ "),
            (YesNo::No, buttons[2], Color::Red, "✗ "),
        ] {
            let is_selected = self.value == Some(choice);
            let label = if is_selected {
                format!("{mark}{choice}")
            } else {
                choice.to_string()
            };
            render_button_to_buffer(buf, button_area, &label, is_selected, accent);
        }

        if let Some(error) = self.error {
            Line::styled(error, Style::default().fg(Color::Red)).render(rows[1], buf);
        } else if self.focused {
            Line::styled("y/←: Yes  n/→: No", Style::default().fg(Color::DarkGray))
                .render(rows[1], buf);
        }
    }
}
