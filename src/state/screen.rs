//! UI-side form screen state
//!
//! Holds what the renderer needs: text buffers, focus, per-field status
//! display, and the current view. Implements [`PresentationSink`] so engine
//! commands land directly in renderable state.

use crate::engine::{FieldId, PresentationSink};

/// Focus slot for the Register button (after the five fields)
pub const REGISTER_FOCUS: usize = 5;

/// Number of focusable slots: five fields plus the Register button
pub const FOCUS_SLOTS: usize = 6;

/// Current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Confirmation,
}

/// Rendered status of one field, set by the engine on validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub is_valid: bool,
    pub display_text: String,
}

/// State behind the registration screen
#[derive(Debug, Default)]
pub struct FormScreen {
    pub view: View,
    buffers: [String; 5],
    statuses: [Option<FieldStatus>; 5],
    focus: usize,
    pub submit_enabled: bool,
    pub confirmation: Option<String>,
}

impl FormScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field that currently has focus, if the focus is not on the button
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.focus).copied()
    }

    pub fn is_register_focused(&self) -> bool {
        self.focus == REGISTER_FOCUS
    }

    /// Move focus to the next slot (wraps around)
    pub fn next_focus(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_SLOTS;
    }

    /// Move focus to the previous slot (wraps around)
    pub fn prev_focus(&mut self) {
        if self.focus == 0 {
            self.focus = FOCUS_SLOTS - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Current text of a field
    pub fn buffer(&self, id: FieldId) -> &str {
        &self.buffers[id.index()]
    }

    /// Append a character to the focused field's buffer
    pub fn push_char(&mut self, c: char) {
        if let Some(id) = self.focused_field() {
            self.buffers[id.index()].push(c);
        }
    }

    /// Remove the last character from the focused field's buffer
    pub fn pop_char(&mut self) {
        if let Some(id) = self.focused_field() {
            self.buffers[id.index()].pop();
        }
    }

    /// Status display for a field; None until its first validation
    pub fn status(&self, id: FieldId) -> Option<&FieldStatus> {
        self.statuses[id.index()].as_ref()
    }
}

impl PresentationSink for FormScreen {
    fn set_field_status(&mut self, id: FieldId, is_valid: bool, display_text: &str) {
        self.statuses[id.index()] = Some(FieldStatus {
            is_valid,
            display_text: display_text.to_string(),
        });
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_confirmation(&mut self, message: &str) {
        self.confirmation = Some(message.to_string());
        self.view = View::Confirmation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_focus_is_first_field() {
            let screen = FormScreen::new();
            assert_eq!(screen.focused_field(), Some(FieldId::FirstName));
            assert!(!screen.is_register_focused());
        }

        #[test]
        fn test_next_focus_walks_fields_then_button() {
            let mut screen = FormScreen::new();
            for expected in &FieldId::ALL[1..] {
                screen.next_focus();
                assert_eq!(screen.focused_field(), Some(*expected));
            }
            screen.next_focus();
            assert!(screen.is_register_focused());
            assert_eq!(screen.focused_field(), None);
        }

        #[test]
        fn test_next_focus_wraps_around() {
            let mut screen = FormScreen::new();
            for _ in 0..FOCUS_SLOTS {
                screen.next_focus();
            }
            assert_eq!(screen.focused_field(), Some(FieldId::FirstName));
        }

        #[test]
        fn test_prev_focus_wraps_to_button() {
            let mut screen = FormScreen::new();
            screen.prev_focus();
            assert!(screen.is_register_focused());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_edits_only_focused_buffer() {
            let mut screen = FormScreen::new();
            screen.push_char('A');
            screen.push_char('l');
            assert_eq!(screen.buffer(FieldId::FirstName), "Al");
            assert_eq!(screen.buffer(FieldId::LastName), "");
        }

        #[test]
        fn test_pop_char_removes_last() {
            let mut screen = FormScreen::new();
            screen.push_char('A');
            screen.push_char('l');
            screen.pop_char();
            assert_eq!(screen.buffer(FieldId::FirstName), "A");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut screen = FormScreen::new();
            screen.pop_char();
            assert_eq!(screen.buffer(FieldId::FirstName), "");
        }

        #[test]
        fn test_editing_with_button_focused_is_noop() {
            let mut screen = FormScreen::new();
            screen.prev_focus(); // Register button
            screen.push_char('x');
            for id in FieldId::ALL {
                assert_eq!(screen.buffer(id), "");
            }
        }
    }

    mod sink {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_fields_have_no_status() {
            let screen = FormScreen::new();
            for id in FieldId::ALL {
                assert!(screen.status(id).is_none());
            }
        }

        #[test]
        fn test_set_field_status_lands_on_the_right_field() {
            let mut screen = FormScreen::new();
            screen.set_field_status(FieldId::Email, false, "Invalid (user@farmingdale.edu)");
            let status = screen.status(FieldId::Email).expect("status set");
            assert!(!status.is_valid);
            assert_eq!(status.display_text, "Invalid (user@farmingdale.edu)");
            assert!(screen.status(FieldId::FirstName).is_none());
        }

        #[test]
        fn test_set_submit_enabled() {
            let mut screen = FormScreen::new();
            assert!(!screen.submit_enabled);
            screen.set_submit_enabled(true);
            assert!(screen.submit_enabled);
        }

        #[test]
        fn test_show_confirmation_flips_view() {
            let mut screen = FormScreen::new();
            screen.show_confirmation("Registration Successful!");
            assert_eq!(screen.view, View::Confirmation);
            assert_eq!(
                screen.confirmation.as_deref(),
                Some("Registration Successful!")
            );
        }
    }
}
