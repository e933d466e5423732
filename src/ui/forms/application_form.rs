//! Job application form rendering
//!
//! The form is laid out as a fixed column of rows taller than most
//! terminals. Rows whose top line falls inside the viewport at the current
//! scroll offset are drawn, clipped at the bottom edge.

use super::field_renderer::{
    draw_field_message, draw_radio_field, draw_select_field, draw_text_field, FieldFrame,
    FieldMessage,
};
use crate::app::App;
use crate::state::{calculate_age, City, FieldName, SalaryRange, SUBMIT_FOCUS};
use crate::ui::components::{render_action_button, YesNoSelector, BUTTON_HEIGHT, YES_NO_HEIGHT};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Height of the line under each field for errors and hints
const MESSAGE_HEIGHT: u16 = 1;

/// One vertical slot of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Heading(&'static str),
    Field(FieldName),
    Submit,
}

/// Rows in display order
pub const FORM_ROWS: [FormRow; 13] = [
    FormRow::Heading("Personal Information"),
    FormRow::Field(FieldName::Name),
    FormRow::Field(FieldName::BirthDate),
    FormRow::Heading("Job Details"),
    FormRow::Field(FieldName::City),
    FormRow::Field(FieldName::ExpectedSalary),
    FormRow::Heading("Additional Information"),
    FormRow::Field(FieldName::Reason),
    FormRow::Heading("Additional Questions"),
    FormRow::Field(FieldName::Question1),
    FormRow::Field(FieldName::Question2),
    FormRow::Field(FieldName::Question3),
    FormRow::Submit,
];

impl FormRow {
    pub fn height(&self) -> u16 {
        match self {
            Self::Heading(_) => 2,
            Self::Field(field) => field_height(*field) + MESSAGE_HEIGHT,
            Self::Submit => BUTTON_HEIGHT,
        }
    }
}

/// Height of a field's input area, excluding its message line
fn field_height(field: FieldName) -> u16 {
    match field {
        FieldName::ExpectedSalary => SalaryRange::ALL.len() as u16 + 2,
        FieldName::Reason => 6,
        // Question text + yes/no buttons
        FieldName::Question1 | FieldName::Question2 | FieldName::Question3 => BUTTON_HEIGHT + 1,
        _ => 3,
    }
}

/// Total height of all rows
pub fn content_height() -> u16 {
    FORM_ROWS.iter().map(FormRow::height).sum()
}

/// Top offset and height of the row holding a focus slot
pub fn focus_row_span(focus: usize) -> (u16, u16) {
    let target = if focus == SUBMIT_FOCUS {
        FormRow::Submit
    } else {
        match FieldName::ALL.get(focus) {
            Some(field) => FormRow::Field(*field),
            None => return (0, 0),
        }
    };

    let mut top = 0;
    for row in FORM_ROWS {
        if row == target {
            return (top, row.height());
        }
        top += row.height();
    }
    (0, 0)
}

/// Rows starting inside a viewport of `viewport` lines scrolled by `offset`,
/// as (row, y relative to the viewport, height left to draw)
pub fn visible_rows(offset: u16, viewport: u16) -> Vec<(FormRow, u16, u16)> {
    let bottom = offset.saturating_add(viewport);
    let mut visible = Vec::new();
    let mut top = 0u16;
    for row in FORM_ROWS {
        let height = row.height();
        if top >= offset && top < bottom {
            visible.push((row, top - offset, height.min(bottom - top)));
        }
        top += height;
    }
    visible
}

/// Draw the scrollable application form
pub fn draw_application_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);

    for (row, y, height) in visible_rows(app.state.scroll_offset, inner.height) {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + y,
            width: inner.width,
            height,
        };
        match row {
            FormRow::Heading(title) => draw_heading(frame, row_area, title),
            FormRow::Field(field) => draw_form_field(frame, row_area, app, field),
            FormRow::Submit => render_action_button(
                frame,
                row_area,
                "Submit Job Application",
                app.state.active_form_field == SUBMIT_FOCUS,
            ),
        }
    }

    let max_offset = content_height().saturating_sub(inner.height);
    if max_offset > 0 {
        let mut scrollbar_state = ScrollbarState::new(max_offset as usize)
            .position(app.state.scroll_offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin::new(0, 1)),
            &mut scrollbar_state,
        );
    }
}

fn draw_heading(frame: &mut Frame, area: Rect, title: &str) {
    let heading = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    frame.render_widget(heading, area);
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let record = app.form.record();
    let error = app.form.error(field);
    let is_active = app.state.focused_field() == Some(field);

    let input_area = Rect {
        height: field_height(field),
        ..area
    }
    .intersection(area);
    let message_area = Rect {
        y: area.y + field_height(field),
        height: MESSAGE_HEIGHT,
        ..area
    }
    .intersection(area);
    let frame_info = FieldFrame {
        label: field.label(),
        is_active,
        has_error: app.form.errors().contains(field),
    };

    let mut message = error.map_or(FieldMessage::None, FieldMessage::Error);

    match field {
        FieldName::Name => draw_text_field(
            frame,
            input_area,
            frame_info,
            &record.name,
            "Enter your full name",
            field.is_multiline(),
        ),
        FieldName::BirthDate => {
            draw_text_field(
                frame,
                input_area,
                frame_info,
                &app.state.birth_date_input,
                "YYYY-MM-DD",
                field.is_multiline(),
            );
            if error.is_none() {
                message = match record.birth_date {
                    Some(birth) => {
                        FieldMessage::Hint(format!("Age: {} years", calculate_age(birth, app.today())))
                    }
                    None if !app.state.birth_date_input.is_empty() => {
                        FieldMessage::Hint("Enter the full date as YYYY-MM-DD".to_string())
                    }
                    None => FieldMessage::None,
                };
            }
        }
        FieldName::City => {
            draw_select_field(
                frame,
                input_area,
                frame_info,
                record.city.map(|c| c.label()),
                "Select a city",
            );
            if is_active && error.is_none() {
                message = FieldMessage::Hint(format!("←/→ to choose ({} cities)", City::ALL.len()));
            }
        }
        FieldName::ExpectedSalary => {
            let options: Vec<String> = SalaryRange::ALL
                .iter()
                .map(|range| format!("{} SAR", range.label()))
                .collect();
            let selected = record
                .expected_salary
                .and_then(|s| SalaryRange::ALL.iter().position(|r| *r == s));
            draw_radio_field(frame, input_area, frame_info, &options, selected);
            if is_active && error.is_none() {
                message = FieldMessage::Hint("←/→ or 1-3 to choose".to_string());
            }
        }
        FieldName::Reason => draw_text_field(
            frame,
            input_area,
            frame_info,
            &record.reason,
            "Describe the reasons that motivate you to apply for this position...",
            field.is_multiline(),
        ),
        FieldName::Question1 | FieldName::Question2 | FieldName::Question3 => {
            draw_question(frame, area, app, field, is_active);
            return;
        }
    }

    draw_field_message(frame, message_area, &message);
}

fn draw_question(frame: &mut Frame, area: Rect, app: &App, field: FieldName, is_active: bool) {
    let number = field.question_number().unwrap_or_default();
    let text_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let question = Paragraph::new(Line::from(Span::styled(
        format!("{number}. {} *", field.label()),
        text_style,
    )));
    frame.render_widget(
        question,
        Rect {
            height: 1,
            ..area
        }
        .intersection(area),
    );

    let selector = YesNoSelector::new(app.form.record().answer(field))
        .error(app.form.error(field))
        .focused(is_active);
    frame.render_widget(
        selector,
        Rect {
            y: area.y + 1,
            height: YES_NO_HEIGHT,
            ..area
        }
        .intersection(area),
    );
}
