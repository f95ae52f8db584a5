use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::assessment::form::AssessmentForm;
use crate::assessment::upload::{ResumeFile, UploadPolicy};
use crate::models::assessment::AssessmentType;

/// Every variant renders as a message fit to show the user.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Could not reach the server. Please check your connection and try again.")]
    Network(#[source] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("The server returned an unexpected response. Please try again.")]
    UnexpectedResponse,

    #[error("Could not prepare your submission: {0}")]
    Encode(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAck {
    redirect_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Posts a finished questionnaire to the submission endpoints.
///
/// One attempt per call; the caller decides whether to try again.
#[derive(Clone)]
pub struct SubmissionClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self, assessment_type: AssessmentType, id: Uuid, policy: UploadPolicy) -> String {
        format!(
            "{}/api/assessment/{}/{id}/{}",
            self.base_url,
            assessment_type.code(),
            policy.endpoint()
        )
    }

    /// Sends the answers (never the score snapshot) and optional resume.
    /// Returns the page to redirect to.
    pub async fn submit(
        &self,
        assessment_type: AssessmentType,
        id: Uuid,
        policy: UploadPolicy,
        form: &AssessmentForm,
        resume: Option<&ResumeFile>,
    ) -> Result<String, SubmitError> {
        let form_json = serde_json::to_string(&form.without_snapshot())
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        let mut multipart = Form::new().text("formData", form_json);
        if let Some(file) = resume {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;
            multipart = multipart.part("resume", part);
        }

        let url = self.endpoint(assessment_type, id, policy);
        debug!("Submitting assessment {id} to {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .multipart(multipart)
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmitError::Network)?;

        if !status.is_success() {
            warn!("Submission of assessment {id} rejected with {status}");
            return Err(rejection(status, &body));
        }

        let ack: SubmitAck =
            serde_json::from_str(&body).map_err(|_| SubmitError::UnexpectedResponse)?;
        Ok(ack.redirect_url)
    }
}

fn rejection(status: StatusCode, body: &str) -> SubmitError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            format!(
                "Failed to submit assessment (HTTP {}). Please try again.",
                status.as_u16()
            )
        });
    SubmitError::Rejected {
        status: status.as_u16(),
        message,
    }
}
