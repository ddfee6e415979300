use serde::{Deserialize, Serialize};

use super::{ContactEmail, ContactMessage, FirstName, FormState, LastName, ValidationResult};

/// A form state that passed validation, kept for display after the form resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: ContactEmail,
    pub message: Option<ContactMessage>,
}

impl SubmissionRecord {
    pub fn first_name(&self) -> &str {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(AsRef::as_ref)
    }
}

impl TryFrom<&FormState> for SubmissionRecord {
    type Error = ValidationResult;

    fn try_from(value: &FormState) -> Result<Self, Self::Error> {
        let mut errors = ValidationResult::default();
        let first_name = FirstName::parse(&value.first_name)
            .map_err(|e| errors.record(e))
            .ok();
        let last_name = LastName::parse(&value.last_name)
            .map_err(|e| errors.record(e))
            .ok();
        let email = ContactEmail::parse(&value.email)
            .map_err(|e| errors.record(e))
            .ok();
        let message = ContactMessage::parse(&value.message);

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(Self {
                first_name,
                last_name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}
