//! Application state definitions

use super::forms::{parse_date, FieldName};
use chrono::NaiveDate;

/// Focus slots: every field plus the submit button
pub const FOCUS_COUNT: usize = FieldName::ALL.len() + 1;

/// Index of the submit button in the focus order
pub const SUBMIT_FOCUS: usize = FieldName::ALL.len();

/// Length of a complete `YYYY-MM-DD` date
const DATE_INPUT_LEN: usize = 10;

/// UI state that is not part of the application record
#[derive(Debug, Default)]
pub struct AppState {
    // Focus
    pub active_form_field: usize,

    // Scrolling
    pub scroll_offset: u16,

    /// Raw birth date text; the record only sees it once it parses
    pub birth_date_input: String,
}

impl AppState {
    /// Field under focus, `None` when the submit button is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_form_field).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_form_field == SUBMIT_FOCUS
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FOCUS_COUNT;
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FOCUS_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(idx) = FieldName::ALL.iter().position(|f| *f == field) {
            self.active_form_field = idx;
        }
    }

    /// Scroll up by `lines`
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, never past `max_offset`
    pub fn scroll_down(&mut self, lines: u16, max_offset: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Adjust the scroll offset so rows `top..top + height` fit in the viewport
    pub fn ensure_visible(&mut self, top: u16, height: u16, viewport: u16) {
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if top + height > self.scroll_offset + viewport {
            // Rows taller than the viewport stay pinned to their top
            self.scroll_offset = (top + height).saturating_sub(viewport).min(top);
        }
    }

    /// Append a character to the birth date input.
    ///
    /// Only digits and `-` are accepted, up to a full date.
    pub fn push_date_char(&mut self, c: char) -> bool {
        if (c.is_ascii_digit() || c == '-') && self.birth_date_input.len() < DATE_INPUT_LEN {
            self.birth_date_input.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last character of the birth date input
    pub fn pop_date_char(&mut self) -> bool {
        self.birth_date_input.pop().is_some()
    }

    /// The birth date input as a date, once it is complete and valid
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        if self.birth_date_input.len() == DATE_INPUT_LEN {
            parse_date(&self.birth_date_input).ok()
        } else {
            None
        }
    }

    /// Reset focus and input buffers after the form is cleared
    pub fn clear_form(&mut self) {
        self.active_form_field = 0;
        self.birth_date_input.clear();
    }
}

/// Step through a closed set of options.
///
/// From unset, moving forward selects the first option and backward the last.
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None if forward => 0,
        None => len - 1,
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
    };
    Some(options[next])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{City, SalaryRange};

    mod focus {
        use super::*;

        #[test]
        fn test_default_focuses_name() {
            let state = AppState::default();
            assert_eq!(state.focused_field(), Some(FieldName::Name));
            assert!(!state.is_submit_focused());
        }

        #[test]
        fn test_next_field_reaches_submit_then_wraps() {
            let mut state = AppState::default();
            for _ in 0..SUBMIT_FOCUS {
                state.next_form_field();
            }
            assert!(state.is_submit_focused());
            assert_eq!(state.focused_field(), None);
            state.next_form_field();
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut state = AppState::default();
            state.prev_form_field();
            assert!(state.is_submit_focused());
        }

        #[test]
        fn test_focus_field() {
            let mut state = AppState::default();
            state.focus_field(FieldName::Question2);
            assert_eq!(state.focused_field(), Some(FieldName::Question2));
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_scroll_up_saturates() {
            let mut state = AppState::default();
            state.scroll_up(3);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_scroll_down_clamps() {
            let mut state = AppState::default();
            state.scroll_down(10, 4);
            assert_eq!(state.scroll_offset, 4);
        }

        #[test]
        fn test_scroll_to_top() {
            let mut state = AppState {
                scroll_offset: 12,
                ..Default::default()
            };
            state.scroll_to_top();
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_ensure_visible_scrolls_down() {
            let mut state = AppState::default();
            state.ensure_visible(30, 4, 20);
            assert_eq!(state.scroll_offset, 14);
        }

        #[test]
        fn test_ensure_visible_scrolls_up() {
            let mut state = AppState {
                scroll_offset: 14,
                ..Default::default()
            };
            state.ensure_visible(2, 4, 20);
            assert_eq!(state.scroll_offset, 2);
        }

        #[test]
        fn test_ensure_visible_noop_when_visible() {
            let mut state = AppState {
                scroll_offset: 5,
                ..Default::default()
            };
            state.ensure_visible(10, 4, 20);
            assert_eq!(state.scroll_offset, 5);
        }

        #[test]
        fn test_ensure_visible_tall_row_pins_top() {
            let mut state = AppState::default();
            state.ensure_visible(30, 40, 20);
            assert_eq!(state.scroll_offset, 30);
        }
    }

    mod date_input {
        use super::*;

        fn typed(text: &str) -> AppState {
            let mut state = AppState::default();
            for c in text.chars() {
                state.push_date_char(c);
            }
            state
        }

        #[test]
        fn test_rejects_letters() {
            let mut state = AppState::default();
            assert!(!state.push_date_char('a'));
            assert!(state.birth_date_input.is_empty());
        }

        #[test]
        fn test_stops_at_full_length() {
            let mut state = typed("1990-01-01");
            assert!(!state.push_date_char('5'));
            assert_eq!(state.birth_date_input, "1990-01-01");
        }

        #[test]
        fn test_partial_date_is_unset() {
            assert_eq!(typed("1990-01").parsed_birth_date(), None);
        }

        #[test]
        fn test_complete_date_parses() {
            assert_eq!(
                typed("1990-01-31").parsed_birth_date(),
                NaiveDate::from_ymd_opt(1990, 1, 31)
            );
        }

        #[test]
        fn test_impossible_date_is_unset() {
            assert_eq!(typed("1990-02-31").parsed_birth_date(), None);
        }

        #[test]
        fn test_pop_and_clear() {
            let mut state = typed("19");
            assert!(state.pop_date_char());
            assert_eq!(state.birth_date_input, "1");
            state.active_form_field = 4;
            state.clear_form();
            assert!(state.birth_date_input.is_empty());
            assert_eq!(state.active_form_field, 0);
        }
    }

    mod cycling {
        use super::*;

        #[test]
        fn test_forward_from_unset_selects_first() {
            assert_eq!(cycle_option(&City::ALL, None, true), Some(City::Riyadh));
        }

        #[test]
        fn test_backward_from_unset_selects_last() {
            assert_eq!(cycle_option(&City::ALL, None, false), Some(City::Hail));
        }

        #[test]
        fn test_wraps_both_ways() {
            assert_eq!(
                cycle_option(&SalaryRange::ALL, Some(SalaryRange::From15000), true),
                Some(SalaryRange::From3000To8000)
            );
            assert_eq!(
                cycle_option(&SalaryRange::ALL, Some(SalaryRange::From3000To8000), false),
                Some(SalaryRange::From15000)
            );
        }

        #[test]
        fn test_empty_options() {
            let options: [City; 0] = [];
            assert_eq!(cycle_option(&options, None, true), None);
        }
    }
}
