//! Inline form validation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration validate with `validator` derives on the request
//! DTOs. This module flattens the result into one message per field so the
//! pages can render it next to each input.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// First validation message for each failing field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid {field}."), ToString::to_string);
                Some((field.to_string(), message))
            })
            .collect();
        Self { messages }
    }
}

/// Validate `input`, returning it unchanged when every field passes.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_input<T: Validate>(input: T) -> Result<T, FieldErrors> {
    match input.validate() {
        Ok(()) => Ok(input),
        Err(errors) => {
            log::debug!("form rejected: {errors}");
            Err(FieldErrors::from(errors))
        }
    }
}
