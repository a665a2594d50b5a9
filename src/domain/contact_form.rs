//! src/domain/contact_form.rs
//!
//! The contact form as a small state machine:
//!
//! ```text
//! Idle -> Submitting -> Success | Failure
//! ```
//!
//! `Success` and `Failure` fall back to `Idle` on the next edit or submit.

use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_name::ContactName;
use crate::domain::contact_submission::ContactSubmission;
use crate::domain::validation::ValidationError;
use crate::intake::{Intake, SubmissionError};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon. ✨";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or email me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Raw form input as posted by the browser.
///
/// Absent keys decode as empty values; an unchecked checkbox is never sent.
#[derive(serde::Deserialize, Debug, Default, Clone)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub newsletter: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Newsletter(bool),
    Message(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    newsletter: bool,
    message: String,
    status: FormStatus,
    errors: FieldErrors,
}

impl From<ContactFormData> for ContactForm {
    fn from(data: ContactFormData) -> Self {
        Self {
            name: data.name,
            email: data.email,
            newsletter: data.newsletter.is_some(),
            message: data.message,
            ..Self::default()
        }
    }
}

impl ContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn newsletter(&self) -> bool {
        self.newsletter
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The submit control is disabled while this holds.
    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Message shown above the form once an attempt has completed.
    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Success => Some(SUCCESS_MESSAGE),
            FormStatus::Failure => Some(FAILURE_MESSAGE),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        if self.is_busy() {
            tracing::debug!("Ignoring a field edit while a submission is in flight");
            return;
        }

        match edit {
            FieldEdit::Name(name) => {
                self.name = name;
                self.errors.name = None;
            }
            FieldEdit::Email(email) => {
                self.email = email;
                self.errors.email = None;
            }
            FieldEdit::Newsletter(newsletter) => self.newsletter = newsletter,
            FieldEdit::Message(message) => self.message = message,
        }
        self.status = FormStatus::Idle;
    }

    /// Checks both required fields so every inline error shows at once.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let name = ContactName::parse(self.name.clone());
        let email = ContactEmail::parse(self.email.clone());

        match (name, email) {
            (Ok(name), Ok(email)) => Ok(ContactSubmission {
                name,
                email,
                newsletter: self.newsletter,
                message: Some(self.message.clone()).filter(|m| !m.is_empty()),
            }),
            (name, email) => Err(FieldErrors {
                name: name.err(),
                email: email.err(),
            }),
        }
    }

    /// Moves to `Submitting` and hands out the record to send.
    ///
    /// Returns `None`, and sends nothing, if a submission is already in
    /// flight or a field is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_busy() {
            tracing::debug!("A submission is already in flight");
            return None;
        }

        self.status = FormStatus::Idle;
        match self.validate() {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.status = FormStatus::Submitting;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.is_busy() {
            return;
        }

        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.newsletter = false;
                self.message.clear();
                self.status = FormStatus::Success;
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver a contact submission"
                );
                self.status = FormStatus::Failure;
            }
        }
    }

    /// Validates, sends once and records the outcome. There is no retry.
    pub async fn submit(&mut self, intake: &dyn Intake) -> FormStatus {
        if let Some(submission) = self.begin_submit() {
            let outcome = intake.submit(&submission).await;
            self.finish_submit(outcome);
        }
        self.status
    }
}
