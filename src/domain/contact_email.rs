//! src/domain/contact_email.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation::ValidationError;

// something, an `@`, something; no whitespace anywhere.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::EmailRequired);
        }

        if !EMAIL_SHAPE.is_match(&s) {
            return Err(ValidationError::EmailInvalid);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
