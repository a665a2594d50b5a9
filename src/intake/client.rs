//! src/intake/client.rs

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::IntakeSettings;
use crate::domain::ContactSubmission;
use crate::intake::{Intake, SubmissionError};

pub struct IntakeClient {
    http_client: Client,
    endpoint: String,
}

impl IntakeClient {
    pub fn new(settings: &IntakeSettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Intake for IntakeClient {
    #[tracing::instrument(
        name = "Forwarding a contact submission to the intake endpoint",
        skip(self, submission)
    )]
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status));
        }

        tracing::info!(%status, endpoint = %self.endpoint, "Intake endpoint accepted the submission");
        Ok(())
    }
}
