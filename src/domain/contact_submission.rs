//! src/domain/contact_submission.rs

use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_name::ContactName;

/// A validated contact request, alive only while it is being sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub newsletter: bool,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
struct SubmissionBody<'a> {
    name: &'a str,
    email: &'a str,
    newsletter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl serde::Serialize for ContactSubmission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SubmissionBody {
            name: self.name.as_ref(),
            email: self.email.as_ref(),
            newsletter: self.newsletter,
            message: self.message.as_deref(),
        }
        .serialize(serializer)
    }
}
