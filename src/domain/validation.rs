//! src/domain/validation.rs

/// Per-field validation failures, shown inline beneath the offending field.
///
/// The `Display` text is what the visitor reads.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email address")]
    EmailInvalid,
}
