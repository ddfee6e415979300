use axum::{
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::domain::Field;
use crate::session_state::TypedSession;

use super::ContactError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

impl FormData {
    fn into_changes(self) -> [(Field, String); 4] {
        [
            (Field::FirstName, self.first_name),
            (Field::LastName, self.last_name),
            (Field::Email, self.email),
            (Field::Message, self.message),
        ]
    }
}

#[tracing::instrument(
    name = "Submit contact form",
    skip(session, form),
    fields(
        first_name = %form.first_name,
        email = %form.email,
    )
)]
pub async fn submit_contact(
    session: TypedSession,
    form: Form<FormData>,
) -> Result<Response, ContactError> {
    let mut contact_form = session
        .get_contact_form()
        .map_err(ContactError::SessionError)?;
    for (field, value) in form.0.into_changes() {
        contact_form.change(field, value);
    }
    if let Err(errors) = contact_form.submit() {
        for (field, error) in errors.iter() {
            tracing::debug!(%field, %error, "Invalid contact form field");
        }
    }
    session
        .insert_contact_form(&contact_form)
        .map_err(ContactError::SessionError)?;
    Ok(Redirect::to("/").into_response())
}

#[derive(Deserialize)]
pub struct FieldChange {
    field: Field,
    #[serde(default)]
    value: String,
}

#[tracing::instrument(
    name = "Change contact form field",
    skip(session, change),
    fields(field = %change.field)
)]
pub async fn change_field(
    session: TypedSession,
    change: Form<FieldChange>,
) -> Result<Response, ContactError> {
    let mut contact_form = session
        .get_contact_form()
        .map_err(ContactError::SessionError)?;
    let errors = contact_form.change(change.0.field, change.0.value);
    tracing::debug!(invalid_fields = errors.len(), "Contact form revalidated");
    session
        .insert_contact_form(&contact_form)
        .map_err(ContactError::SessionError)?;
    Ok(Redirect::to("/").into_response())
}
