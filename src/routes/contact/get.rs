use askama_axum::Template;
use axum::response::{IntoResponse, Response};

use crate::domain::{Field, FormState, SubmissionRecord};
use crate::session_state::TypedSession;

use super::ContactError;

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactPage<'a> {
    state: &'a FormState,
    first_name_error: Option<String>,
    last_name_error: Option<String>,
    email_error: Option<String>,
    submission: Option<&'a SubmissionRecord>,
}

#[tracing::instrument(name = "Render contact form", skip(session))]
pub async fn contact_form(session: TypedSession) -> Result<Response, ContactError> {
    let form = session
        .get_contact_form()
        .map_err(ContactError::SessionError)?;
    let errors = form.visible_errors();

    let page = ContactPage {
        state: form.state(),
        first_name_error: errors.message(Field::FirstName),
        last_name_error: errors.message(Field::LastName),
        email_error: errors.message(Field::Email),
        submission: form.last_submission(),
    };
    Ok(page.into_response())
}
