//! Axum route handlers for the HTML pages.

use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use crate::errors::AppError;
use crate::matching::analyze;
use crate::matching::input::SubmissionForm;
use crate::pages::navigation::{page_cookie, resolve_initial_page, Page, PAGE_QUERY_PARAM};
use crate::pages::templates;
use crate::pages::view::{DemoPanel, ResultView};
use crate::report::render_blocking;
use crate::state::AppState;

/// GET /
///
/// Selects the page from `?page=`, then the `current_page` cookie, then Home.
/// A repeated `page` parameter uses its first value; an unreadable query
/// string counts as absent.
pub async fn handle_page(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
    headers: HeaderMap,
) -> Response {
    let requested = query.as_ref().and_then(|Query(pairs)| {
        pairs
            .iter()
            .find(|(key, _)| key == PAGE_QUERY_PARAM)
            .map(|(_, value)| value.as_str())
    });
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok());
    let page = resolve_initial_page(requested, cookie);

    let body = match page {
        Page::Home => templates::home_body(),
        Page::Demo => templates::demo_body(None, ""),
        Page::Info => templates::info_body(),
        Page::Contact => templates::contact_body(),
    };

    page_response(&state, page, &body)
}

/// POST /demo/analyze
///
/// Blocked submissions render a warning. Backend failures render the degraded
/// zero result with an inline error; the page itself never fails on them.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = SubmissionForm::from_multipart(multipart).await?;
    let job_description = form.job_description.clone();

    let panel = match form.validate() {
        Err(e) => DemoPanel::Warning(e.to_string()),
        Ok(submission) => {
            let outcome = analyze(state.matcher.as_ref(), &submission).await;
            let report = render_blocking(outcome.result.clone()).await?;
            DemoPanel::Result(ResultView::new(&outcome, &report))
        }
    };

    let body = templates::demo_body(Some(&panel), &job_description);
    Ok(page_response(&state, Page::Demo, &body))
}

/// Renders the shell around `body` and remembers `page` for the session.
fn page_response(state: &AppState, page: Page, body: &str) -> Response {
    let html = templates::render_page(&state.branding, page, body);
    ([(header::SET_COOKIE, page_cookie(page))], Html(html)).into_response()
}
