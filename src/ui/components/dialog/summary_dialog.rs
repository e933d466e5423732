//! Confirmation dialog shown after a successful submission

use super::base::{render_dialog, DialogConfig};
use crate::state::{calculate_age, ApplicationRecord};
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const TITLE: &str = "Application Submitted Successfully!";
const FOLLOW_UP: &str =
    "Your application will be reviewed and we'll contact you within 3-5 business days";

/// "Application Summary" lines for a submitted record
pub fn summary_lines(record: &ApplicationRecord, today: NaiveDate) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let value = Style::default().fg(Color::Gray);

    let age = record
        .birth_date
        .map(|birth| format!("{} years", calculate_age(birth, today)))
        .unwrap_or_default();
    let city = record.city.map(|c| c.label()).unwrap_or_default();
    let salary = record
        .expected_salary
        .map(|s| format!("{} SAR", s.label()))
        .unwrap_or_default();

    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name}: "), label),
            Span::styled(text, value),
        ])
    };

    vec![
        Line::from(Span::styled(
            "Application Summary:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        row("Name", record.name.clone()),
        row("Age", age),
        row("City", city.to_string()),
        row("Expected Salary", salary),
    ]
}

/// Render the submission summary; `scale` below 1.0 while it closes
pub fn render_summary_dialog(
    frame: &mut Frame,
    record: &ApplicationRecord,
    today: NaiveDate,
    scale: f32,
) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            details: summary_lines(record, today),
            message: FOLLOW_UP,
            hint: Some(hint),
            max_width: 64,
            scale,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{City, SalaryRange};
    use ratatui::{backend::TestBackend, Terminal};

    fn record() -> ApplicationRecord {
        ApplicationRecord {
            name: "Fahad Saleh".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            city: Some(City::Hail),
            expected_salary: Some(SalaryRange::From15000),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_summary_lines() {
        let lines: Vec<String> = summary_lines(&record(), today()).iter().map(line_text).collect();
        assert_eq!(
            lines,
            vec![
                "Application Summary:",
                "Name: Fahad Saleh",
                "Age: 26 years",
                "City: Ha'il",
                "Expected Salary: 15000 and above SAR",
            ]
        );
    }

    #[test]
    fn test_renders_full_dialog() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_summary_dialog(frame, &record(), today(), 1.0))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains(TITLE));
        assert!(text.contains("Name: Fahad Saleh"));
        assert!(text.contains("to close"));
    }

    #[test]
    fn test_closing_dialog_has_no_content() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_summary_dialog(frame, &record(), today(), 0.5))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(!text.contains("Fahad"));
        assert!(text.contains('┌'));
    }
}
