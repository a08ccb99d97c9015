//! The single point of contact with the remote skill-matching service.
//!
//! One multipart POST per submission. No retries: any failure is terminal for
//! that submission and the page falls back to a zeroed result.
//!
//! `AppState` holds an `Arc<dyn MatchService>` so handlers can be exercised
//! against a stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::Error as _;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::matching::error::MatchError;
use crate::matching::input::{Submission, JOB_DESCRIPTION_FIELD, RESUME_FIELD};
use crate::matching::normalize::{format_score, normalize_response};
use crate::models::match_result::{BackendMatchResponse, MatchResult};

/// Backend error bodies are echoed to the user; keep them readable.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[async_trait]
pub trait MatchService: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<MatchResult, MatchError>;
}

#[derive(Clone)]
pub struct MatchClient {
    client: Client,
    endpoint: String,
}

impl MatchClient {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .connect_timeout(connect_timeout)
                .build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MatchService for MatchClient {
    async fn submit(&self, submission: &Submission) -> Result<MatchResult, MatchError> {
        let resume = &submission.resume;
        debug!(
            "Submitting {:?} resume '{}' ({} bytes) to {}",
            submission.kind,
            resume.file_name,
            resume.bytes.len(),
            self.endpoint
        );

        let part = Part::stream_with_length(resume.bytes.clone(), resume.bytes.len() as u64)
            .file_name(resume.file_name.clone())
            .mime_str(&resume.content_type)
            .map_err(|_| MatchError::UnsupportedFileType(resume.file_name.clone()))?;
        let form = Form::new()
            .part(RESUME_FIELD, part)
            .text(JOB_DESCRIPTION_FIELD, submission.job_description.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(MatchError::Backend {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        if !value.is_object() {
            return Err(MatchError::InvalidResponse(serde_json::Error::custom(
                "expected a JSON object",
            )));
        }
        let raw: BackendMatchResponse = serde_json::from_value(value)?;
        let result = normalize_response(raw);

        info!(
            "Match succeeded for '{}': score={}%, matched={}, missing={}",
            resume.file_name,
            format_score(result.match_score),
            result.matched_skills.len(),
            result.missing_skills.len()
        );

        Ok(result)
    }
}

/// Page-level product of one submission: the result to display and, when the
/// call failed, the error that forced the degraded result.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub result: MatchResult,
    pub error: Option<MatchError>,
}

impl AnalysisOutcome {
    pub fn degraded(error: MatchError) -> Self {
        Self {
            result: MatchResult::degraded(),
            error: Some(error),
        }
    }
}

/// Runs one submission and never fails: errors are logged and folded into a
/// degraded outcome.
pub async fn analyze(service: &dyn MatchService, submission: &Submission) -> AnalysisOutcome {
    match service.submit(submission).await {
        Ok(result) => AnalysisOutcome {
            result,
            error: None,
        },
        Err(e) => {
            error!("Match request failed: {e}");
            AnalysisOutcome::degraded(e)
        }
    }
}
