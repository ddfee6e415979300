mod contact_email;
mod contact_form;
mod contact_message;
mod field;
mod first_name;
mod form_state;
mod last_name;
mod submission;
mod validation;

pub use contact_email::ContactEmail;
pub use contact_form::ContactForm;
pub use contact_message::ContactMessage;
pub use field::Field;
pub use first_name::FirstName;
pub use form_state::{apply_change, FormState};
pub use last_name::LastName;
pub use submission::SubmissionRecord;
pub use validation::{validate, ValidationError, ValidationResult};
