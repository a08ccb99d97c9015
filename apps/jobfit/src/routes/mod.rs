pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::pages::handlers as pages;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_page))
        .route("/demo/analyze", post(pages::handle_analyze))
        // JSON API
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/report", post(report::handle_report))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::input::test_support::{content_type, multipart_body};
    use crate::matching::input::Submission;
    use crate::matching::{MatchError, MatchService};
    use crate::models::match_result::MatchResult;
    use crate::pages::branding::Branding;

    /// Returns a fixed result, or a backend error with the given status.
    struct StubMatcher {
        reply: Result<MatchResult, u16>,
        calls: AtomicUsize,
    }

    impl StubMatcher {
        fn ok(result: MatchResult) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(result),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl MatchService for StubMatcher {
        async fn submit(&self, _submission: &Submission) -> Result<MatchResult, MatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(result) => Ok(result.clone()),
                Err(status) => Err(MatchError::Backend {
                    status: *status,
                    body: "service unavailable".to_string(),
                }),
            }
        }
    }

    fn sample_result() -> MatchResult {
        MatchResult {
            match_score: 87.0,
            matched_skills: vec!["Python".into(), "SQL".into()],
            missing_skills: vec!["Go".into()],
        }
    }

    fn app(matcher: Arc<StubMatcher>) -> Router {
        build_router(AppState {
            config: Config {
                match_service_url: "http://127.0.0.1:1/match".to_string(),
                match_timeout: Duration::from_secs(1),
                match_connect_timeout: Duration::from_secs(1),
                port: 0,
                rust_log: "info".to_string(),
                logo_path: "logo1.jpg".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
            matcher,
            branding: Arc::new(Branding::default()),
        })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn multipart_post(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type())
            .body(Body::from(body))
            .unwrap()
    }

    fn valid_form() -> Vec<u8> {
        multipart_body(
            Some(("cv.txt", "text/plain", b"Python and SQL")),
            Some("Python, SQL, Go"),
        )
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    fn set_cookie(response: &Response) -> &str {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(get("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_demo_query_selects_demo_without_click() {
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(get("/?page=Demo"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).starts_with("current_page=Demo"));

        let html = body_text(response).await;
        assert!(html.contains("Demo - Try it Now!"));
        assert!(html.contains("class=\"selected\">Demo</a>"));
    }

    #[tokio::test]
    async fn test_root_defaults_to_home() {
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(get("/"))
            .await
            .unwrap();
        assert!(set_cookie(&response).starts_with("current_page=Home"));
        assert!(body_text(response).await.contains("Try it Out"));
    }

    #[tokio::test]
    async fn test_repeated_page_param_uses_first_value() {
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(get("/?page=Demo&page=Info"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).starts_with("current_page=Demo"));
    }

    #[tokio::test]
    async fn test_unknown_page_param_falls_back_to_cookie() {
        let request = Request::builder()
            .uri("/?page=Nowhere")
            .header(header::COOKIE, "current_page=Contact")
            .body(Body::empty())
            .unwrap();
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).starts_with("current_page=Contact"));
    }

    #[tokio::test]
    async fn test_cookie_restores_prior_page() {
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "current_page=Info")
            .body(Body::empty())
            .unwrap();
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(request)
            .await
            .unwrap();
        assert!(body_text(response).await.contains("<h1>Information</h1>"));
    }

    #[tokio::test]
    async fn test_analyze_renders_result_and_download() {
        let matcher = StubMatcher::ok(sample_result());
        let response = app(matcher.clone())
            .oneshot(multipart_post("/demo/analyze", valid_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).starts_with("current_page=Demo"));

        let html = body_text(response).await;
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
        assert!(html.contains("<progress value=\"0.87\" max=\"1\">"));
        assert!(html.contains("<strong>87%</strong> match with the job description."));
        assert_eq!(html.matches("skill skill-positive").count(), 2);
        assert_eq!(html.matches("skill skill-negative").count(), 1);
        assert!(html.contains("download=\"resume_skill_report.pdf\""));
        assert!(!html.contains("class=\"error\""));
        // The submitted description is kept in the form.
        assert!(html.contains(">Python, SQL, Go</textarea>"));
    }

    #[tokio::test]
    async fn test_analyze_backend_500_shows_error_and_zero_result() {
        let response = app(StubMatcher::failing(500))
            .oneshot(multipart_post("/demo/analyze", valid_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<p class=\"error\">Backend Error (500): service unavailable</p>"));
        assert!(html.contains("<progress value=\"0\" max=\"1\">"));
        assert!(html.contains("<strong>0%</strong>"));
        assert!(!html.contains("skill skill-"));
    }

    #[tokio::test]
    async fn test_analyze_missing_input_warns_without_backend_call() {
        let matcher = StubMatcher::ok(sample_result());
        let body = multipart_body(Some(("cv.txt", "text/plain", b"Python")), Some("   "));
        let response = app(matcher.clone())
            .oneshot(multipart_post("/demo/analyze", body))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Please upload a resume and paste a job description."));
        assert!(!html.contains("class=\"result\""));
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_api_match_returns_json_result() {
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(multipart_post("/api/v1/match", valid_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            value,
            json!({
                "result": {
                    "match_score": 87.0,
                    "matched_skills": ["Python", "SQL"],
                    "missing_skills": ["Go"]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_api_match_degrades_on_backend_error() {
        let response = app(StubMatcher::failing(502))
            .oneshot(multipart_post("/api/v1/match", valid_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["result"]["match_score"], json!(0.0));
        assert_eq!(value["result"]["matched_skills"], json!([]));
        assert_eq!(value["error"], "Backend Error (502): service unavailable");
    }

    #[tokio::test]
    async fn test_analyze_unsupported_file_warns_without_calling_backend() {
        let matcher = StubMatcher::ok(sample_result());
        let body = multipart_body(
            Some(("cv.docx", "application/octet-stream", b"PK")),
            Some("Rust"),
        );
        let response = app(matcher.clone())
            .oneshot(multipart_post("/demo/analyze", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 0);
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("only PDF or TXT files are allowed"));
        assert!(!html.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn test_api_match_missing_file_is_bad_request() {
        let body = multipart_body(None, Some("Rust"));
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(multipart_post("/api/v1/match", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_report_returns_pdf_attachment() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "match_score": "N/A",
                    "matched_skills": ["Python"],
                    "missing_skills": ["Go"]
                })
                .to_string(),
            ))
            .unwrap();
        let response = app(StubMatcher::ok(sample_result()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"resume_skill_report.pdf\""
        );

        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF"));
        let needle = b"Match Score: 0%";
        assert!(bytes.windows(needle.len()).any(|w| w == needle));
    }
}
