//! Application state definitions

use super::form::RegisterForm;
use crate::registrar::Receipt;
use crate::schema::{error_map, FieldError, FieldId};
use std::collections::HashMap;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Confirmation,
}

/// Where the form is in its edit/submit cycle.
///
/// Clean until the first edit; each submit lands on one of the
/// Submitted states; any later edit returns to Editing. No terminal
/// state — the form stays interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Clean,
    Editing,
    SubmittedInvalid,
    SubmittedValid,
}

/// Mutable state owned by one form instance
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegisterForm,
    /// One message per failing field, replaced wholesale on each submit
    pub errors: HashMap<FieldId, String>,
    pub phase: FormPhase,
    pub last_receipt: Option<Receipt>,
}

impl AppState {
    pub fn new(subscribe_default: bool) -> Self {
        Self {
            form: RegisterForm::new(subscribe_default),
            ..Self::default()
        }
    }

    /// The displayed message for a field, if its last submit failed
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Record that a field was edited.
    ///
    /// Moves the phase to Editing; the error map stays as-is until the
    /// next submit.
    pub fn mark_edited(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Replace the error map from a failed validation pass
    pub fn apply_failures(&mut self, failures: &[FieldError]) {
        self.errors = error_map(failures);
        self.phase = FormPhase::SubmittedInvalid;
    }

    /// Record a fully valid submission
    pub fn apply_success(&mut self) {
        self.errors.clear();
        self.phase = FormPhase::SubmittedValid;
    }

    /// Start over with a blank form
    pub fn reset_form(&mut self, subscribe_default: bool) {
        self.form.clear(subscribe_default);
        self.errors.clear();
        self.phase = FormPhase::Clean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_clean_on_register_view() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Register);
        assert_eq!(state.phase, FormPhase::Clean);
        assert!(state.errors.is_empty());
        assert!(state.last_receipt.is_none());
    }

    #[test]
    fn test_mark_edited_moves_to_editing() {
        let mut state = AppState::default();
        state.mark_edited();
        assert_eq!(state.phase, FormPhase::Editing);
    }

    #[test]
    fn test_mark_edited_after_invalid_submit_keeps_errors() {
        let mut state = AppState::default();
        state.apply_failures(&[FieldError::new(FieldId::Name, "too short")]);
        assert_eq!(state.phase, FormPhase::SubmittedInvalid);

        state.mark_edited();
        assert_eq!(state.phase, FormPhase::Editing);
        assert_eq!(state.error_for(FieldId::Name), Some("too short"));
    }

    #[test]
    fn test_apply_failures_replaces_previous_map() {
        let mut state = AppState::default();
        state.apply_failures(&[FieldError::new(FieldId::Name, "too short")]);
        state.apply_failures(&[FieldError::new(FieldId::Email, "invalid")]);

        assert!(state.error_for(FieldId::Name).is_none());
        assert_eq!(state.error_for(FieldId::Email), Some("invalid"));
    }

    #[test]
    fn test_apply_success_clears_errors() {
        let mut state = AppState::default();
        state.apply_failures(&[FieldError::new(FieldId::Name, "too short")]);
        state.apply_success();

        assert!(state.errors.is_empty());
        assert_eq!(state.phase, FormPhase::SubmittedValid);
    }

    #[test]
    fn test_reset_form_returns_to_clean() {
        let mut state = AppState::new(true);
        state.form.set_value(FieldId::Name, "Alice");
        state.apply_failures(&[FieldError::new(FieldId::Email, "invalid")]);

        state.reset_form(true);
        assert_eq!(state.phase, FormPhase::Clean);
        assert!(state.errors.is_empty());
        assert_eq!(state.form.name.as_text(), "");
        assert!(state.form.subscribe.is_on());
    }
}
