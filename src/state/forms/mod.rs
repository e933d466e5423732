//! Form domain layer
//!
//! Field value objects, the application record, its validation rules and
//! the controller that owns them for one form session.

mod field;
mod form_state;
mod record;
mod validation;

pub use field::{
    parse_date, City, FieldName, FieldUpdate, ParseFieldError, Question, SalaryRange, YesNo,
};
pub use form_state::{
    ChannelObserver, FormController, FormEvent, FormObserver, ViewState, DISMISS_SCROLL_DELAY,
};
pub use record::ApplicationRecord;
pub use validation::{calculate_age, validate, ErrorMap};
