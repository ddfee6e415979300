use serde::{Deserialize, Serialize};

use super::Field;

/// Raw values of the form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Returns `state` with `field` replaced by `value`.
pub fn apply_change(state: &FormState, field: Field, value: impl Into<String>) -> FormState {
    let mut next = state.clone();
    let value = value.into();
    match field {
        Field::FirstName => next.first_name = value,
        Field::LastName => next.last_name = value,
        Field::Email => next.email = value,
        Field::Message => next.message = value,
    }
    next
}
