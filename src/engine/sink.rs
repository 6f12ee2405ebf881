//! The engine's boundary: input events in, presentation commands out

use super::rules::FieldId;

/// Status glyph shown next to a valid field
pub const VALID_GLYPH: &str = "✓";

/// Message shown on the confirmation view after a successful submit
pub const CONFIRMATION_MESSAGE: &str = "Registration Successful!";

/// Events the host dispatches into the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Focus left a field; carries the field's text at that moment
    FieldFocusLost { id: FieldId, text: String },
    /// The user triggered the Register action
    SubmitRequested,
}

/// Trait for presentation commands emitted by the engine, enabling mocking in tests
///
/// The engine never touches widgets directly; the host renders these commands
/// however it likes.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationSink {
    /// Update one field's status display
    fn set_field_status(&mut self, id: FieldId, is_valid: bool, display_text: &str);

    /// Enable or disable the Register action
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Replace the form with the confirmation view
    fn show_confirmation(&mut self, message: &str);
}
