//! Module `state`
//!
//! Defines the immutable `FormState` and the pure transitions that produce the
//! next state from an event. Only the submission flow and the presentation
//! layer feed events into it.

use crate::api::FilteredResponse;
use crate::error::FormError;
use crate::options::{DisplayOption, OptionSet};
use crate::validation;

/// Everything the form holds between two user actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    raw_input: String,
    options: OptionSet,
    response: Option<FilteredResponse>,
    error: Option<FormError>,
    is_valid: bool,
    is_submitting: bool,
}

/// A state change requested by the user or by the submission flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The text input changed; validity is recomputed.
    InputChanged(String),
    OptionToggled(DisplayOption, bool),
    OptionsReplaced(OptionSet),
    /// Clears the previous outcome and marks a request in flight.
    SubmitStarted,
    /// The submission ended with a user-visible error.
    SubmitRejected(FormError),
    ResponseReceived(FilteredResponse),
    Reset,
}

/// Applies one event and returns the resulting state.
pub fn reduce(state: &FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::InputChanged(raw_input) => FormState {
            is_valid: validation::is_valid(&raw_input),
            raw_input,
            ..state.clone()
        },
        FormEvent::OptionToggled(option, checked) => FormState {
            options: state.options.with(option, checked),
            ..state.clone()
        },
        FormEvent::OptionsReplaced(options) => FormState {
            options,
            ..state.clone()
        },
        FormEvent::SubmitStarted => FormState {
            response: None,
            error: None,
            is_submitting: true,
            ..state.clone()
        },
        FormEvent::SubmitRejected(error) => FormState {
            response: None,
            error: Some(error),
            is_submitting: false,
            ..state.clone()
        },
        FormEvent::ResponseReceived(response) => FormState {
            response: Some(response),
            error: None,
            is_submitting: false,
            ..state.clone()
        },
        FormEvent::Reset => FormState::default(),
    }
}

impl FormState {
    /// Runs the pre-flight checks in order and returns the tokens to send.
    ///
    /// Empty input is reported before format, format before selection.
    pub fn check_submission(&self) -> Result<Vec<String>, FormError> {
        if self.raw_input.trim().is_empty() {
            return Err(FormError::EmptyInput);
        }

        if !self.is_valid {
            return Err(FormError::InvalidFormat);
        }

        if !self.options.any_selected() {
            return Err(FormError::NoSelection);
        }

        Ok(validation::split_tokens(&self.raw_input))
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    /// The filtered response of the last successful submission.
    pub fn response(&self) -> Option<&FilteredResponse> {
        self.response.as_ref()
    }

    /// The error of the last submission attempt.
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Whether the current input passes validation.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Whether a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    // --------------------
    // Derived views
    // --------------------

    /// Submit is enabled only for valid input with nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.is_valid && !self.is_submitting
    }

    /// Inline hint shown under non-empty invalid input.
    pub fn input_hint(&self) -> Option<&'static str> {
        (!self.is_valid && !self.raw_input.is_empty()).then(|| FormError::InvalidFormat.message())
    }

    /// Option selection is only offered while the input is valid.
    pub fn options_visible(&self) -> bool {
        self.is_valid
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}
