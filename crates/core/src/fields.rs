//! Field presence checks for create/update payloads.
//!
//! Payloads arrive with every field optional so that a missing field is
//! reported by name as a validation error instead of a generic decode error.

use crate::error::CoreError;

/// Require a mandatory field, naming it in the error when absent.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field: {field}")))
}

/// Require a mandatory text field that must also be non-blank.
pub fn required_text(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Field must not be blank: {field}"
        )));
    }
    Ok(value)
}
