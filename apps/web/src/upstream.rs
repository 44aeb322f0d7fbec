//! Upstream analysis boundary — the real form submission.
//!
//! The analysis service is opaque to this crate: we post the resume file and
//! job description as a multipart form and store whatever results page it
//! returns. `Submitter` is the seam the progress pipeline fires through at
//! the 6000 ms mark; tests swap in a counting fake to pin down the
//! exactly-once invariant.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, info};

/// Payload carried from the intake handler to the real submission.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
    pub job_description: String,
}

/// Whatever the analysis service produced, verbatim. The body is the results
/// page served back to the user.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis service returned status {status}")]
    Status { status: u16 },
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, upload: &ResumeUpload) -> Result<AnalysisOutcome, SubmitError>;
}

/// Production submitter: multipart POST to `{endpoint}/analyze`.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, upload: &ResumeUpload) -> Result<AnalysisOutcome, SubmitError> {
        let url = format!("{}/analyze", self.endpoint.trim_end_matches('/'));
        debug!(%url, file = %upload.file_name, "Submitting analysis form");

        let file_part = Part::bytes(upload.content.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new()
            .text("job_description", upload.job_description.clone())
            .part("resume", file_part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        info!(status = status.as_u16(), "Analysis submission completed");
        Ok(AnalysisOutcome {
            status: status.as_u16(),
            body,
        })
    }
}
