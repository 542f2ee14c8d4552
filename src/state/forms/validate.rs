//! Pure validation rules for contact form fields

use super::field::FormField;
use thiserror::Error;

/// Minimum trimmed length for the name field
pub const NAME_MIN_LEN: usize = 2;
/// Minimum trimmed length for the message field
pub const MESSAGE_MIN_LEN: usize = 10;

/// Validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("This field is required")]
    EmptyField,
    #[error("Enter a valid email")]
    InvalidEmail,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
}

/// Validate a field's current trimmed value.
///
/// Checks run in order (required, email format, length minimum) and only the
/// first failure is reported.
pub fn validate(field: &FormField) -> Result<(), FieldErrorKind> {
    let value = field.trimmed();

    if value.is_empty() {
        return Err(FieldErrorKind::EmptyField);
    }

    if field.name == "email" && !is_valid_email(value) {
        return Err(FieldErrorKind::InvalidEmail);
    }

    let min = match field.name.as_str() {
        "name" => NAME_MIN_LEN,
        "message" => MESSAGE_MIN_LEN,
        _ => 0,
    };
    if value.chars().count() < min {
        return Err(FieldErrorKind::TooShort { min });
    }

    Ok(())
}

/// Check for a `local@domain.tld` shape: no whitespace, exactly one `@`, and at
/// least one `.` after the `@` with characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}
