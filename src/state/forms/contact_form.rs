//! Contact form state: the four fields plus focus handling

use super::field::FormField;
use super::validate;
use crate::state::review::SubmissionAttempt;

/// Number of input fields in the contact form
pub const FIELD_COUNT: usize = 4;
/// Focus position of the submit row (after the last field)
pub const SUBMIT_ROW: usize = FIELD_COUNT;

/// The contact form: name, email, subject, message and a submit row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    active_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            subject: FormField::text("subject", "Subject", false),
            message: FormField::text("message", "Message", true),
            active_index: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns true if focus is on the submit row
    pub fn is_submit_row_active(&self) -> bool {
        self.active_index == SUBMIT_ROW
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            _ => None,
        }
    }

    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            _ => None,
        }
    }

    /// The focused field, or None when the submit row is active
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.get_field_mut(self.active_index)
    }

    /// Move focus forward, validating the field being left (blur)
    pub fn focus_next(&mut self) {
        self.blur_active();
        self.active_index = (self.active_index + 1) % (FIELD_COUNT + 1);
    }

    /// Move focus backward, validating the field being left (blur)
    pub fn focus_prev(&mut self) {
        self.blur_active();
        self.active_index = if self.active_index == 0 {
            SUBMIT_ROW
        } else {
            self.active_index - 1
        };
    }

    /// Validate the focused field and update its annotation
    fn blur_active(&mut self) {
        let index = self.active_index;
        if let Some(field) = self.get_field_mut(index) {
            match validate::validate(field) {
                Ok(()) => field.clear_annotation(),
                Err(error) => field.annotate(error),
            }
        }
    }

    /// Validate every field, updating all annotations in one pass.
    /// Returns true only if the whole form is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.subject,
            &mut self.message,
        ] {
            match validate::validate(field) {
                Ok(()) => field.clear_annotation(),
                Err(error) => {
                    field.annotate(error);
                    all_valid = false;
                }
            }
        }
        all_valid
    }

    /// Capture the trimmed field values for one submit cycle
    pub fn attempt(&self) -> SubmissionAttempt {
        SubmissionAttempt {
            name: self.name.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            subject: self.subject.trimmed().to_string(),
            message: self.message.trimmed().to_string(),
        }
    }

    /// Clear every field and annotation and return focus to the first field
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.active_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldErrorKind;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_value("Ada Lovelace");
        form.email.set_value("ada@example.com");
        form.subject.set_value("Hello");
        form.message.set_value("A message long enough to pass");
        form
    }

    mod focus {
        use super::*;

        #[test]
        fn test_starts_on_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_index(), 0);
            assert!(!form.is_submit_row_active());
        }

        #[test]
        fn test_focus_next_wraps_through_submit_row() {
            let mut form = filled_form();
            for _ in 0..FIELD_COUNT {
                form.focus_next();
            }
            assert!(form.is_submit_row_active());
            form.focus_next();
            assert_eq!(form.active_index(), 0);
        }

        #[test]
        fn test_focus_prev_wraps_to_submit_row() {
            let mut form = filled_form();
            form.focus_prev();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_active_field_mut_none_on_submit_row() {
            let mut form = filled_form();
            form.focus_prev();
            assert!(form.active_field_mut().is_none());
        }

        #[test]
        fn test_blur_annotates_invalid_field() {
            let mut form = ContactForm::new();
            // Leaving the empty name field marks it required
            form.focus_next();
            assert_eq!(
                form.name.annotation(),
                Some(FieldErrorKind::EmptyField)
            );
        }

        #[test]
        fn test_blur_clears_stale_annotation_on_valid_field() {
            let mut form = filled_form();
            form.name.annotate(FieldErrorKind::EmptyField);
            form.focus_next();
            assert!(form.name.annotation().is_none());
        }
    }

    mod whole_form {
        use super::*;

        #[test]
        fn test_valid_form_passes() {
            let mut form = filled_form();
            assert!(form.validate_all());
            for index in 0..FIELD_COUNT {
                assert!(form.get_field(index).unwrap().annotation().is_none());
            }
        }

        #[test]
        fn test_any_empty_field_fails_whole_form() {
            let mut form = filled_form();
            form.subject.clear();
            assert!(!form.validate_all());
            assert_eq!(
                form.subject.annotation(),
                Some(FieldErrorKind::EmptyField)
            );
            // Other fields stay clean
            assert!(form.name.annotation().is_none());
        }

        #[test]
        fn test_all_failures_annotated_in_one_pass() {
            let mut form = ContactForm::new();
            assert!(!form.validate_all());
            for index in 0..FIELD_COUNT {
                assert_eq!(
                    form.get_field(index).unwrap().annotation(),
                    Some(FieldErrorKind::EmptyField)
                );
            }
        }
    }

    #[test]
    fn test_attempt_captures_trimmed_values() {
        let mut form = filled_form();
        form.name.set_value("  Ada  ");
        let attempt = form.attempt();
        assert_eq!(attempt.name, "Ada");
        assert_eq!(attempt.email, "ada@example.com");
        assert_eq!(attempt.subject, "Hello");
        assert_eq!(attempt.message, "A message long enough to pass");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.focus_next();
        form.email.annotate(FieldErrorKind::InvalidEmail);
        form.reset();
        assert_eq!(form.active_index(), 0);
        for index in 0..FIELD_COUNT {
            let field = form.get_field(index).unwrap();
            assert_eq!(field.value(), "");
            assert!(field.annotation().is_none());
        }
    }
}
