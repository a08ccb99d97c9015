//! Axum route handler for report downloads.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::matching::normalize::normalize_report_request;
use crate::models::match_result::ReportRequest;
use crate::report::{render_blocking, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};

/// POST /api/v1/report
///
/// Takes a MatchResult as JSON and returns the PDF as an attachment.
/// The score is normalized again since it came from the client.
pub async fn handle_report(Json(request): Json<ReportRequest>) -> Result<Response, AppError> {
    let result = normalize_report_request(request);
    let bytes = render_blocking(result).await?;

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
