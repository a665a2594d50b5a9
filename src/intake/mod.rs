//! src/intake/mod.rs
//!
//! The external form backend that receives contact submissions.

use std::fmt::Formatter;

use reqwest::StatusCode;

use crate::domain::ContactSubmission;
use crate::utils::error_helpers::error_chain_fmt;

pub mod client;

pub use client::IntakeClient;

/// Both variants surface to the visitor as the same generic failure.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("The intake endpoint answered with {0}")]
    Rejected(StatusCode),

    #[error("Failed to reach the intake endpoint")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Hands one submission over to the intake endpoint.
///
/// Implementations make a single attempt; `Ok` means the endpoint accepted it.
#[async_trait::async_trait]
pub trait Intake: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;
}
