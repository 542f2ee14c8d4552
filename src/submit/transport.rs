//! Submission transport: trait abstraction for mocking plus the HTTP implementation

use crate::state::SubmissionAttempt;
use async_trait::async_trait;
use reqwest::{header, multipart, Client, StatusCode};
use thiserror::Error;

/// Submission failure. Non-2xx statuses and transport-level errors are
/// treated identically by the coordinator; the distinction only matters
/// for diagnostics.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint returned status {0}")]
    Status(StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Trait for the submission transport, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Deliver one submission attempt to the configured endpoint
    async fn send(&self, attempt: &SubmissionAttempt) -> Result<(), SubmitError>;
}

/// Real transport: one multipart POST per attempt
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, attempt: &SubmissionAttempt) -> Result<(), SubmitError> {
        let form = multipart::Form::new()
            .text("name", attempt.name.clone())
            .text("email", attempt.email.clone())
            .text("subject", attempt.subject.clone())
            .text("message", attempt.message.clone());

        tracing::debug!("posting submission to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("submission endpoint answered {status}");
        // Response body is intentionally ignored; any 2xx counts as delivered
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}
