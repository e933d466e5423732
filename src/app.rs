//! Application state and core logic

use crate::config::AppConfig;
use crate::platform::SUBMIT_MODIFIERS;
use crate::state::{
    cycle_option, AppState, ChannelObserver, City, DismissAnimation, FieldName, FieldUpdate,
    FormController, FormEvent, SalaryRange, ViewState,
};
use crate::ui::{content_height, focus_row_span, form_viewport_height, YesNoSelector};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Lines moved per mouse wheel notch
const SCROLL_STEP: u16 = 3;

/// Main application struct
pub struct App {
    /// Current UI state
    pub state: AppState,
    /// Record, errors and view state of the form
    pub form: FormController,
    pub config: AppConfig,
    /// Form notifications, also used to re-post delayed scrolls
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    /// Closing animation of the summary dialog
    pub dismiss_animation: Option<DismissAnimation>,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Fixed date used instead of the local clock
    today_override: Option<NaiveDate>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut form = FormController::new();
        form.subscribe(Box::new(ChannelObserver::new(events_tx.clone())));
        tracing::info!(session = %form.session_id(), "Form session started");

        Self {
            state: AppState::default(),
            form,
            config,
            events_tx,
            events_rx,
            dismiss_animation: None,
            terminal_size: None,
            status_message: None,
            today_override: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Reference date for age calculations
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    #[cfg(test)]
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today_override = Some(today);
    }

    /// Rows of the form visible at the current terminal height
    fn viewport_height(&self) -> u16 {
        form_viewport_height(self.terminal_size.map(|(h, _)| h).unwrap_or(24))
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self) -> u16 {
        content_height().saturating_sub(self.viewport_height())
    }

    /// Scroll so the focused row is on screen
    fn ensure_focus_visible(&mut self) {
        let (top, height) = focus_row_span(self.state.active_form_field);
        let viewport = self.viewport_height();
        self.state.ensure_visible(top, height, viewport);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.form.record().is_empty() && self.form.view_state() == ViewState::Editing {
                tracing::info!(
                    session = %self.form.session_id(),
                    "Quitting with an unsubmitted application"
                );
            }
            self.quit = true;
            return;
        }

        // The summary is modal
        if self.form.view_state() == ViewState::Submitted {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss();
            }
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            KeyCode::Char('s') if key.modifiers.intersects(SUBMIT_MODIFIERS) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_form_field();
                self.ensure_focus_visible();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_form_field();
                self.ensure_focus_visible();
            }
            KeyCode::Enter if self.state.is_submit_focused() => self.submit(),
            _ => {
                if let Some(field) = self.state.focused_field() {
                    self.handle_field_key(field, key);
                }
            }
        }
    }

    /// Keys routed to the focused field
    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent) {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        match field {
            FieldName::Name => {
                let mut name = self.form.record().name.clone();
                let changed = match (typed, key.code) {
                    (Some(c), _) => {
                        name.push(c);
                        true
                    }
                    (None, KeyCode::Backspace) => name.pop().is_some(),
                    (None, KeyCode::Enter) => {
                        self.advance_focus();
                        false
                    }
                    _ => false,
                };
                if changed {
                    self.form.set_field(FieldUpdate::Name(name));
                }
            }
            FieldName::BirthDate => {
                let changed = match (typed, key.code) {
                    (Some(c), _) => self.state.push_date_char(c),
                    (None, KeyCode::Backspace) => self.state.pop_date_char(),
                    (None, KeyCode::Enter) => {
                        self.advance_focus();
                        false
                    }
                    _ => false,
                };
                if changed {
                    let date = self.state.parsed_birth_date();
                    self.form.set_field(FieldUpdate::BirthDate(date));
                }
            }
            FieldName::City => {
                let current = self.form.record().city;
                let city = match key.code {
                    KeyCode::Left => cycle_option(&City::ALL, current, false),
                    KeyCode::Right | KeyCode::Char(' ') => cycle_option(&City::ALL, current, true),
                    KeyCode::Backspace | KeyCode::Delete => None,
                    KeyCode::Enter => {
                        self.advance_focus();
                        return;
                    }
                    _ => return,
                };
                self.form.set_field(FieldUpdate::City(city));
            }
            FieldName::ExpectedSalary => {
                let current = self.form.record().expected_salary;
                let salary = match key.code {
                    KeyCode::Left => cycle_option(&SalaryRange::ALL, current, false),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        cycle_option(&SalaryRange::ALL, current, true)
                    }
                    KeyCode::Char(c @ '1'..='3') => {
                        let idx = c as usize - '1' as usize;
                        SalaryRange::ALL.get(idx).copied()
                    }
                    KeyCode::Backspace | KeyCode::Delete => None,
                    KeyCode::Enter => {
                        self.advance_focus();
                        return;
                    }
                    _ => return,
                };
                self.form.set_field(FieldUpdate::ExpectedSalary(salary));
            }
            FieldName::Reason => {
                let mut reason = self.form.record().reason.clone();
                let changed = match (typed, key.code) {
                    (Some(c), _) => {
                        reason.push(c);
                        true
                    }
                    (None, KeyCode::Enter) => {
                        reason.push('\n');
                        true
                    }
                    (None, KeyCode::Backspace) => reason.pop().is_some(),
                    _ => false,
                };
                if changed {
                    self.form.set_field(FieldUpdate::Reason(reason));
                }
            }
            FieldName::Question1 | FieldName::Question2 | FieldName::Question3 => {
                let selector = YesNoSelector::new(self.form.record().answer(field));
                let form = &mut self.form;
                let consumed =
                    selector.handle_key(&key, |literal| match FieldUpdate::parse(field, literal) {
                        Ok(update) => form.set_field(update),
                        Err(err) => tracing::warn!("Ignoring answer for {field}: {err}"),
                    });
                if !consumed && key.code == KeyCode::Enter {
                    self.advance_focus();
                }
            }
        }
    }

    fn advance_focus(&mut self) {
        self.state.next_form_field();
        self.ensure_focus_visible();
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.form.view_state() == ViewState::Submitted {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(SCROLL_STEP),
            MouseEventKind::ScrollDown => {
                let max = self.max_scroll();
                self.state.scroll_down(SCROLL_STEP, max);
            }
            _ => {}
        }
    }

    /// Validate and submit the form
    pub fn submit(&mut self) {
        let today = self.today();
        self.form.submit(today);
    }

    /// Close the summary, animating it out while the form resets
    pub fn dismiss(&mut self) {
        if let Some(record) = self.form.submitted_record() {
            self.dismiss_animation = Some(DismissAnimation::new(record.clone()));
        }
        self.form.dismiss();
    }

    /// Apply pending form notifications to the UI
    pub fn process_form_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                FormEvent::ScrollToTop { delay } if delay.is_zero() => self.state.scroll_to_top(),
                FormEvent::ScrollToTop { delay } => self.schedule_scroll_to_top(delay),
                FormEvent::ErrorsPublished(fields) => {
                    if let Some(first) = fields.first() {
                        self.state.focus_field(*first);
                    }
                    let count = self.form.errors().len();
                    let noun = if count == 1 { "field" } else { "fields" };
                    self.status_message = Some(format!("Please fix {count} highlighted {noun}"));
                }
                FormEvent::Submitted => {
                    self.status_message = Some("Application submitted".to_string());
                }
                FormEvent::Dismissed => {
                    self.state.clear_form();
                    self.status_message = None;
                }
                FormEvent::FieldChanged {
                    field,
                    cleared_error,
                } => {
                    tracing::debug!(%field, cleared_error, "Field edited");
                }
            }
        }
    }

    /// Re-post the scroll once `delay` has passed
    fn schedule_scroll_to_top(&self, delay: Duration) {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx
                .send(FormEvent::ScrollToTop {
                    delay: Duration::ZERO,
                })
                .is_err()
            {
                tracing::debug!("App closed before delayed scroll");
            }
        });
    }

    /// Advance the closing animation.
    ///
    /// Returns true while it is still running.
    pub fn update_dismiss_animation(&mut self) -> bool {
        if let Some(anim) = &mut self.dismiss_animation {
            anim.update();
            if anim.is_complete() {
                self.dismiss_animation = None;
            }
        }
        self.dismiss_animation.is_some()
    }
}
