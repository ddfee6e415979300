use axum::extract::FromRequestParts;
use tower_sessions::Session;

use crate::domain::ContactForm;

#[derive(FromRequestParts)]
pub struct TypedSession(Session);

impl TypedSession {
    const CONTACT_FORM_KEY: &'static str = "contact_form";

    /// The visitor's form, or a blank one on their first visit.
    pub fn get_contact_form(&self) -> anyhow::Result<ContactForm> {
        self.0
            .get(Self::CONTACT_FORM_KEY)
            .map(Option::unwrap_or_default)
            .map_err(|e| anyhow::anyhow!(e))
    }

    pub fn insert_contact_form(&self, form: &ContactForm) -> anyhow::Result<()> {
        self.0
            .insert(Self::CONTACT_FORM_KEY, form)
            .map_err(|e| anyhow::anyhow!(e))
    }
}
