//! Contact form field state

use super::validate::FieldErrorKind;

/// A single form field with its current value and inline error annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    value: String,
    pub is_multiline: bool,
    error: Option<FieldErrorKind>,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_multiline,
            error: None,
        }
    }

    /// Get the raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the trimmed value used by validation and submission
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Replace the value without touching the annotation
    #[allow(dead_code)]
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Append a character. Typing suppresses any stale error annotation;
    /// it reappears only on the next blur/submit validation pass.
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.clear_annotation();
    }

    /// Remove the last character, clearing the annotation like any edit
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.clear_annotation();
    }

    /// Clear the value and annotation (form reset)
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Current inline error annotation, if the last validation failed
    pub fn annotation(&self) -> Option<FieldErrorKind> {
        self.error
    }

    /// Attach an error annotation after a failed validation
    pub fn annotate(&mut self, error: FieldErrorKind) {
        self.error = Some(error);
    }

    /// Remove the error annotation
    pub fn clear_annotation(&mut self) {
        self.error = None;
    }
}
