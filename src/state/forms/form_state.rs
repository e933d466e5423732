//! Form state controller
//!
//! Owns the application record, the error map and the view state. Every
//! mutation goes through [`FormController`], which notifies subscribed
//! observers of what changed.

use super::field::{FieldName, FieldUpdate};
use super::record::ApplicationRecord;
use super::validation::{validate, ErrorMap};
use chrono::NaiveDate;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// Delay before scrolling back to the top after the summary is dismissed,
/// long enough for the closing animation to finish
pub const DISMISS_SCROLL_DELAY: Duration = Duration::from_millis(500);

/// Two-phase mode of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Editing,
    Submitted,
}

/// Notification published by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field was written; `cleared_error` is true when its error was removed
    FieldChanged {
        field: FieldName,
        cleared_error: bool,
    },
    /// Validation failed; the listed fields now carry messages
    ErrorsPublished(Vec<FieldName>),
    /// The record passed validation and the summary is showing
    Submitted,
    /// The summary was closed and the form reset
    Dismissed,
    /// The view should scroll to the top once `delay` has passed
    ScrollToTop { delay: Duration },
}

/// Receives controller notifications
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    fn notify(&mut self, event: &FormEvent);
}

/// Observer forwarding events onto a channel drained by the app loop
pub struct ChannelObserver {
    tx: UnboundedSender<FormEvent>,
}

impl ChannelObserver {
    pub fn new(tx: UnboundedSender<FormEvent>) -> Self {
        Self { tx }
    }
}

impl FormObserver for ChannelObserver {
    fn notify(&mut self, event: &FormEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::debug!("Form event receiver dropped, discarding {event:?}");
        }
    }
}

/// Controller for a single form session
pub struct FormController {
    session_id: Uuid,
    record: ApplicationRecord,
    errors: ErrorMap,
    view_state: ViewState,
    /// Record frozen at the moment of a successful submit
    submitted: Option<ApplicationRecord>,
    observers: Vec<Box<dyn FormObserver>>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            record: ApplicationRecord::default(),
            errors: ErrorMap::new(),
            view_state: ViewState::Editing,
            submitted: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for all future events
    pub fn subscribe(&mut self, observer: Box<dyn FormObserver>) {
        self.observers.push(observer);
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Snapshot shown in the summary while submitted
    pub fn submitted_record(&self) -> Option<&ApplicationRecord> {
        self.submitted.as_ref()
    }

    /// Write a field and drop its error entry, without re-validating
    pub fn set_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.record.apply(update);
        let cleared_error = self.errors.remove(field);
        tracing::trace!(session = %self.session_id, %field, cleared_error, "Field changed");
        self.publish(FormEvent::FieldChanged {
            field,
            cleared_error,
        });
    }

    /// Validate the current record against `today`
    pub fn validate(&self, today: NaiveDate) -> ErrorMap {
        validate(&self.record, today)
    }

    /// Validate and, on success, switch to the submitted view.
    ///
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self, today: NaiveDate) -> bool {
        let errors = self.validate(today);
        if errors.is_empty() {
            self.errors.clear();
            self.submitted = Some(self.record.clone());
            self.view_state = ViewState::Submitted;
            tracing::info!(session = %self.session_id, "Application submitted");
            self.publish(FormEvent::Submitted);
            true
        } else {
            let fields = errors.fields();
            for (field, message) in errors.iter() {
                tracing::debug!(
                    session = %self.session_id,
                    %field,
                    error = message,
                    "Validation failed"
                );
            }
            tracing::info!(
                session = %self.session_id,
                failing = ?fields,
                "Application rejected by validation"
            );
            self.errors = errors;
            self.publish(FormEvent::ErrorsPublished(fields));
            self.publish(FormEvent::ScrollToTop {
                delay: Duration::ZERO,
            });
            false
        }
    }

    /// Close the summary and reset the form to its empty state
    pub fn dismiss(&mut self) {
        self.view_state = ViewState::Editing;
        self.record = ApplicationRecord::default();
        self.errors.clear();
        self.submitted = None;
        tracing::info!(session = %self.session_id, "Summary dismissed, form reset");
        self.publish(FormEvent::Dismissed);
        self.publish(FormEvent::ScrollToTop {
            delay: DISMISS_SCROLL_DELAY,
        });
    }

    fn publish(&mut self, event: FormEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
