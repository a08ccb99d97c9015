//! Axum route handlers for the JSON matching API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::matching::client::analyze;
use crate::matching::input::SubmissionForm;
use crate::models::match_result::MatchResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub result: MatchResult,
    /// Set when the backend call failed and `result` is the degraded zero result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/v1/match
///
/// Multipart `resume` + `job_description`, forwarded to the matching service.
/// Input errors are a 400; backend failures still return 200 with a degraded result.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let submission = SubmissionForm::from_multipart(multipart)
        .await?
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = analyze(state.matcher.as_ref(), &submission).await;

    Ok(Json(MatchResponse {
        result: outcome.result,
        error: outcome.error.map(|e| e.to_string()),
    }))
}
