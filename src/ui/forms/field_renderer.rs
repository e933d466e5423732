//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Border and title shared by every field kind
#[derive(Debug, Clone, Copy)]
pub struct FieldFrame<'a> {
    pub label: &'a str,
    pub is_active: bool,
    pub has_error: bool,
}

impl FieldFrame<'_> {
    fn color(&self) -> Color {
        if self.has_error {
            Color::Red
        } else if self.is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }

    fn block(&self) -> Block<'_> {
        Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color()))
    }
}

/// Line shown beneath a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMessage<'a> {
    None,
    Error(&'a str),
    Hint(String),
}

/// Draw a free-text field with a cursor when active
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldFrame,
    value: &str,
    placeholder: &str,
    is_multiline: bool,
) {
    let value_style = Style::default().fg(Color::White);
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(
        if field.is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(placeholder, placeholder_style),
        ]))
    } else if is_multiline {
        let inner = field.block().inner(area);
        let width = usize::from(inner.width.max(1));
        let mut lines: Vec<Line> = wrap_chars(value, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect();
        if field.is_active {
            match lines.last_mut() {
                Some(last) if last.width() < width => last.spans.push(cursor),
                _ => lines.push(Line::from(cursor)),
            }
        }
        // Keep the line being typed in view
        let overflow = if field.is_active {
            lines.len().saturating_sub(usize::from(inner.height))
        } else {
            0
        };
        Paragraph::new(lines).scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0))
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, value_style), cursor]))
    };

    frame.render_widget(
        content.wrap(Wrap { trim: false }).block(field.block()),
        area,
    );
}

/// Break text into lines of at most `width` characters, keeping spaces
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }
    }
    lines
}

/// Draw a single-choice dropdown-style field cycled with ←/→
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldFrame,
    selected: Option<&str>,
    placeholder: &str,
) {
    let arrow_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = match selected {
        Some(value) => Span::styled(value, Style::default().fg(Color::White)),
        None => Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        Span::styled("◂ ", arrow_style),
        value,
        Span::styled(" ▸", arrow_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(field.block()), area);
}

/// Draw a radio group with one option per line
pub fn draw_radio_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldFrame,
    options: &[String],
    selected: Option<usize>,
) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = selected == Some(idx);
            let (marker, style) = if is_selected {
                (
                    "(•) ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(marker, style),
                Span::styled(option.as_str(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(field.block()), area);
}

/// Draw the error or hint line beneath a field
pub fn draw_field_message(frame: &mut Frame, area: Rect, message: &FieldMessage) {
    let line = match message {
        FieldMessage::None => return,
        FieldMessage::Error(error) => {
            Line::from(Span::styled(*error, Style::default().fg(Color::Red)))
        }
        FieldMessage::Hint(hint) => Line::from(Span::styled(
            hint.as_str(),
            Style::default().fg(Color::Gray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(f: impl FnOnce(&mut Frame)) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal.draw(f).unwrap();
        terminal
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn frame(is_active: bool, has_error: bool) -> FieldFrame<'static> {
        FieldFrame {
            label: "Full Name *",
            is_active,
            has_error,
        }
    }

    #[test]
    fn test_error_border_is_red() {
        let terminal = render(|f| {
            draw_text_field(f, Rect::new(0, 0, 40, 3), frame(true, true), "Bo", "", false)
        });
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_active_border_is_cyan() {
        let terminal = render(|f| {
            draw_text_field(f, Rect::new(0, 0, 40, 3), frame(true, false), "Bo", "", false)
        });
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::Cyan);
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let terminal = render(|f| {
            draw_text_field(
                f,
                Rect::new(0, 0, 40, 3),
                frame(false, false),
                "",
                "Enter your full name",
                false,
            )
        });
        assert!(row(&terminal, 1).contains("Enter your full name"));
        assert!(row(&terminal, 0).contains("Full Name *"));
    }

    #[test]
    fn test_multiline_value() {
        let terminal = render(|f| {
            draw_text_field(f, Rect::new(0, 0, 40, 5), frame(false, false), "one\ntwo", "", true)
        });
        assert!(row(&terminal, 1).contains("one"));
        assert!(row(&terminal, 2).contains("two"));
    }

    #[test]
    fn test_active_multiline_follows_last_line() {
        let terminal = render(|f| {
            draw_text_field(
                f,
                Rect::new(0, 0, 40, 5),
                frame(true, false),
                "l1\nl2\nl3\nl4\nl5\nl6",
                "",
                true,
            )
        });
        assert!(row(&terminal, 1).contains("l4"));
        assert!(row(&terminal, 3).contains("l6▌"));
        assert!(!row(&terminal, 1).contains("l1"));
    }

    #[test]
    fn test_active_multiline_follows_wrapped_text() {
        let value = "x".repeat(45);
        let terminal = render(|f| {
            draw_text_field(f, Rect::new(0, 0, 12, 5), frame(true, false), &value, "", true)
        });
        // 10 columns inside the border: 4 full lines then 5 characters
        assert_eq!(row(&terminal, 3), format!("│xxxxx▌    │{}", " ".repeat(28)));
    }

    #[test]
    fn test_inactive_multiline_shows_start() {
        let terminal = render(|f| {
            draw_text_field(
                f,
                Rect::new(0, 0, 40, 5),
                frame(false, false),
                "l1\nl2\nl3\nl4\nl5\nl6",
                "",
                true,
            )
        });
        assert!(row(&terminal, 1).contains("l1"));
    }

    #[test]
    fn test_wrap_chars_keeps_spaces_and_blank_lines() {
        assert_eq!(wrap_chars("ab  cd\n\nx", 4), vec!["ab  ", "cd", "", "x"]);
    }

    #[test]
    fn test_select_placeholder() {
        let terminal = render(|f| {
            draw_select_field(f, Rect::new(0, 0, 40, 3), frame(false, false), None, "Select a city")
        });
        assert!(row(&terminal, 1).contains("◂ Select a city ▸"));
    }

    #[test]
    fn test_radio_marks_selected() {
        let options = vec!["A".to_string(), "B".to_string()];
        let terminal = render(|f| {
            draw_radio_field(f, Rect::new(0, 0, 40, 4), frame(false, false), &options, Some(1))
        });
        assert!(row(&terminal, 1).contains("( ) A"));
        assert!(row(&terminal, 2).contains("(•) B"));
    }

    #[test]
    fn test_message_error_and_hint() {
        let terminal = render(|f| {
            draw_field_message(f, Rect::new(0, 0, 40, 1), &FieldMessage::Error("Bad"));
            draw_field_message(
                f,
                Rect::new(0, 1, 40, 1),
                &FieldMessage::Hint("Age: 30 years".to_string()),
            );
            draw_field_message(f, Rect::new(0, 2, 40, 1), &FieldMessage::None);
        });
        assert!(row(&terminal, 0).starts_with("Bad"));
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::Red);
        assert!(row(&terminal, 1).starts_with("Age: 30 years"));
        assert_eq!(row(&terminal, 2).trim(), "");
    }
}
