use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{apply_change, validate, Field, FormState, SubmissionRecord, ValidationResult};

/// One visitor's contact form: the values being edited, which fields they
/// have touched, and the last accepted submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    state: FormState,
    touched: BTreeSet<Field>,
    last_submission: Option<SubmissionRecord>,
}

impl ContactForm {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.last_submission.as_ref()
    }

    pub fn errors(&self) -> ValidationResult {
        validate(&self.state)
    }

    /// Errors of the fields the visitor has interacted with.
    pub fn visible_errors(&self) -> ValidationResult {
        self.errors().restricted_to(&self.touched)
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) -> ValidationResult {
        self.state = apply_change(&self.state, field, value);
        self.touched.insert(field);
        self.errors()
    }

    /// Accepts the current values if they validate, then clears the form.
    /// On failure nothing but the touched set changes.
    pub fn submit(&mut self) -> Result<&SubmissionRecord, ValidationResult> {
        match SubmissionRecord::try_from(&self.state) {
            Ok(record) => {
                tracing::info!("Contact form submission accepted");
                self.state = FormState::default();
                self.touched.clear();
                Ok(self.last_submission.insert(record))
            }
            Err(errors) => {
                tracing::info!(
                    invalid_fields = errors.len(),
                    "Contact form submission rejected"
                );
                self.touched.extend(Field::ALL);
                Err(errors)
            }
        }
    }
}
