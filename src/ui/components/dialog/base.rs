//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Pre-styled lines shown under the title
    pub details: Vec<Line<'a>>,
    /// Message content (can be multi-line with \n), word-wrapped
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to close")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Size factor for open/close animations, 1.0 is full size
    pub scale: f32,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            details: Vec::new(),
            message: "",
            hint: None,
            max_width: 60,
            scale: 1.0,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(config.message, max_line_width);

    // Calculate dialog dimensions
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .chain(config.details.iter().map(Line::width))
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width); // +2 for borders

    // Height: title + blank + details (+ blank) + message lines + blank + hint + borders
    let details_lines = if config.details.is_empty() {
        0
    } else {
        config.details.len() as u16 + 1
    };
    let hint_lines = if config.hint.is_some() { 2 } else { 0 }; // blank + hint
    let dialog_height =
        (2 + details_lines + wrapped_lines.len() as u16 + hint_lines + 2).max(5); // +2 for borders

    let dialog_area = centered_rect(area, dialog_width, dialog_height, config.scale);
    if dialog_area.width == 0 || dialog_area.height == 0 {
        return;
    }

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(Color::Black));

    // Mid-animation the dialog is only a frame
    if config.scale < 1.0 {
        frame.render_widget(block, dialog_area);
        return;
    }

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];

    if !config.details.is_empty() {
        content.extend(config.details);
        content.push(Line::from(""));
    }

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans).centered());
    }

    let dialog = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Center a `width` x `height` rect in `area`, shrunk by `scale`
pub fn centered_rect(area: Rect, width: u16, height: u16, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = ((width as f32 * scale).round() as u16).min(area.width);
    let height = ((height as f32 * scale).round() as u16).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("we will contact you soon", 10),
            vec!["we will", "contact", "you soon"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_centered_rect_full_scale() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10, 1.0), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_half_scale() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10, 0.5), Rect::new(30, 9, 20, 5));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(area, 40, 10, 1.0), Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_centered_rect_zero_scale() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 10, 0.0);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }
}
