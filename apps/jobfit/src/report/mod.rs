// Report Generator: MatchResult -> downloadable PDF.
// Layout is computed first as plain data, then encoded; encoding is CPU-bound and
// runs inside tokio::task::spawn_blocking when called from a handler.

pub mod handlers;
pub mod layout;
pub mod pdf;

use thiserror::Error;

use crate::errors::AppError;
use crate::models::match_result::MatchResult;

pub const REPORT_FILE_NAME: &str = "resume_skill_report.pdf";
pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
}

/// Renders the report synchronously.
pub fn render(result: &MatchResult) -> Result<Vec<u8>, ReportError> {
    pdf::render_pdf(&layout::layout_report(result))
}

/// Renders the report off the async executor.
pub async fn render_blocking(result: MatchResult) -> Result<Vec<u8>, AppError> {
    let bytes = tokio::task::spawn_blocking(move || render(&result))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report render: {e}")))??;
    Ok(bytes)
}
