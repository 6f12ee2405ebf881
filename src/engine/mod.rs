//! Form validation engine
//!
//! Owns the five field rules and per-field validity state, recomputes the
//! aggregate "can submit" predicate on every change, and emits declarative
//! presentation commands instead of touching widgets. Driven entirely through
//! [`InputEvent`]s; rendering is the host's problem.

mod rules;
mod sink;

pub use rules::{FieldId, RuleError, RuleTable};
pub use sink::{InputEvent, PresentationSink, CONFIRMATION_MESSAGE, VALID_GLYPH};

#[cfg(test)]
pub use sink::MockPresentationSink;

/// Per-field validation state
///
/// Untouched means no focus-lost event has fired for the field yet. It counts
/// as not-valid for the aggregate predicate, but no status is ever displayed
/// for an untouched field. There is no transition back to Untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPhase {
    #[default]
    Untouched,
    Invalid,
    Valid,
}

impl FieldPhase {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldPhase::Valid)
    }
}

/// Form-level state: Collecting until a successful submit, then Submitted (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Collecting,
    Submitted,
}

/// Result of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub id: FieldId,
    pub is_valid: bool,
    pub hint: &'static str,
}

/// Result of a submit request
///
/// Rejected is not a failure, just "preconditions not met yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// The validation state machine behind the registration form
#[derive(Debug)]
pub struct FormValidationEngine {
    rules: RuleTable,
    fields: [FieldPhase; 5],
    can_submit: bool,
    phase: FormPhase,
}

impl FormValidationEngine {
    /// Create a new engine; fails fast if the rule table cannot be built
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            rules: RuleTable::new()?,
            fields: [FieldPhase::Untouched; 5],
            can_submit: false,
            phase: FormPhase::Collecting,
        })
    }

    /// Dispatch one input event into the engine
    pub fn handle_event(&mut self, event: InputEvent, sink: &mut dyn PresentationSink) {
        match event {
            InputEvent::FieldFocusLost { id, text } => {
                self.validate_field(id, &text, sink);
            }
            InputEvent::SubmitRequested => {
                self.request_submit(sink);
            }
        }
    }

    /// Validate one field against its rule and refresh the aggregate predicate
    ///
    /// A full-string match, never a substring search. Empty or malformed text
    /// is a normal invalid outcome, not an error. Idempotent: repeating the
    /// same (id, text) re-emits the same commands and leaves the same state.
    pub fn validate_field(
        &mut self,
        id: FieldId,
        text: &str,
        sink: &mut dyn PresentationSink,
    ) -> ValidationResult {
        let rule = self.rules.rule(id);
        let is_valid = rule.matches(text);
        let hint = rule.hint();

        self.fields[id.index()] = if is_valid {
            FieldPhase::Valid
        } else {
            FieldPhase::Invalid
        };
        // Recomputed wholesale on every mutation so the invariant cannot drift
        self.can_submit = self.fields.iter().all(FieldPhase::is_valid);

        tracing::debug!(
            field = id.as_str(),
            is_valid,
            can_submit = self.can_submit,
            "field validated"
        );

        let display_text = if is_valid {
            VALID_GLYPH.to_string()
        } else {
            format!("Invalid ({hint})")
        };
        sink.set_field_status(id, is_valid, &display_text);
        sink.set_submit_enabled(self.can_submit);

        ValidationResult { id, is_valid, hint }
    }

    /// Attempt to submit the form
    ///
    /// A guarded no-op while any field is not valid. On success the engine
    /// moves to Submitted and the confirmation command is emitted; a repeat
    /// request while Submitted returns Accepted without re-emitting it.
    pub fn request_submit(&mut self, sink: &mut dyn PresentationSink) -> SubmitOutcome {
        match self.phase {
            FormPhase::Submitted => SubmitOutcome::Accepted,
            FormPhase::Collecting if self.can_submit => {
                self.phase = FormPhase::Submitted;
                tracing::info!("registration submitted");
                sink.show_confirmation(CONFIRMATION_MESSAGE);
                SubmitOutcome::Accepted
            }
            FormPhase::Collecting => {
                tracing::debug!("submit requested before all fields valid");
                SubmitOutcome::Rejected
            }
        }
    }

    /// Aggregate readiness: true iff all five fields most recently validated to true
    #[allow(dead_code)]
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    /// Current state of one field
    #[allow(dead_code)]
    pub fn field_phase(&self, id: FieldId) -> FieldPhase {
        self.fields[id.index()]
    }

    /// Current form-level state
    #[allow(dead_code)]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }
}
