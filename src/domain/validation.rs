use std::collections::{BTreeMap, BTreeSet};

use super::{Field, FormState, SubmissionRecord};

/// A failed rule on one field. `Display` is the message shown to the visitor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is a required field")]
    Required(Field),
    #[error("{field} must have at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{0} must be a valid email address")]
    InvalidEmail(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::InvalidEmail(field) => *field,
            Self::TooShort { field, .. } => *field,
        }
    }
}

/// At most one error per field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<Field, ValidationError>);

impl ValidationResult {
    pub fn record(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Drops the errors of every field not in `fields`.
    pub fn restricted_to(mut self, fields: &BTreeSet<Field>) -> Self {
        self.0.retain(|field, _| fields.contains(field));
        self
    }
}

/// Runs every field rule against `state`.
pub fn validate(state: &FormState) -> ValidationResult {
    SubmissionRecord::try_from(state).err().unwrap_or_default()
}
