pub mod contact_email;
pub mod contact_form;
pub mod contact_name;
pub mod contact_submission;
pub mod validation;

pub use contact_email::ContactEmail;
pub use contact_form::{ContactForm, ContactFormData, FieldEdit, FieldErrors, FormStatus};
pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;
pub use validation::ValidationError;
