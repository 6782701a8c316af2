//! Integration tests for the docx generation HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring end to end against a mock
//! converter:
//! 1. Request DTOs deserialize correctly
//! 2. The full parse/sanitize/assemble pipeline runs behind the route
//! 3. Error taxonomy maps to the right status codes and `detail` bodies

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use equationshot::adapters::http::{equation_router, EquationAppState};
use equationshot::application::GenerateDocumentHandler;
use equationshot::ports::{ConvertError, DocumentConverter};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mock converter that records the TeX documents it receives.
struct RecordingConverter {
    tex_seen: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingConverter {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            tex_seen: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            tex_seen: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    fn last_tex(&self) -> String {
        self.tex_seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentConverter for RecordingConverter {
    async fn to_docx(&self, tex: &str) -> Result<Vec<u8>, ConvertError> {
        self.tex_seen.lock().unwrap().push(tex.to_string());
        if self.fail {
            Err(ConvertError::failed("pandoc returned error: missing xelatex"))
        } else {
            Ok(b"PK\x03\x04 fake docx".to_vec())
        }
    }

    async fn is_available(&self) -> bool {
        !self.fail
    }
}

fn app(converter: Arc<RecordingConverter>) -> Router {
    let handler = GenerateDocumentHandler::new(converter);
    equation_router().with_state(EquationAppState::new(Arc::new(handler)))
}

fn post_docx(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/docx")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn detail_of(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    value["detail"].as_str().unwrap_or_default().to_string()
}

// =============================================================================
// Success paths
// =============================================================================

#[tokio::test]
async fn text_mode_batch_downloads_docx() {
    let converter = RecordingConverter::new();

    let response = app(converter.clone())
        .oneshot(post_docx(json!({"latex": "E = mc^2\n\na^2 + b^2 = c^2"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=equations.docx"
    );

    // The blank line was skipped; two display equations made it through.
    let tex = converter.last_tex();
    assert!(tex.contains("Total: 2\\\\"));
    assert!(tex.contains("\\begin{equation}\\label{eq001}"));
    assert!(tex.contains("\\begin{equation}\\label{eq002}"));
}

#[tokio::test]
async fn jsonl_mode_resolves_id_collisions_and_sanitizes() {
    let converter = RecordingConverter::new();
    let jsonl = r#"[{"id":"a","latex":"$x=1$"},{"id":"a","latex":"\\dfrac{1}{2}","caption":"half"}]"#;

    let response = app(converter.clone())
        .oneshot(post_docx(json!({ "jsonl": jsonl })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tex = converter.last_tex();
    // Second "a" became "aa"; wrappers stripped; dfrac normalized.
    assert!(tex.contains("\\label{a}"));
    assert!(tex.contains("\\label{aa}"));
    assert!(tex.contains("\\frac{1}{2}"));
    assert!(!tex.contains("dfrac"));
    assert!(tex.contains("\\par\\small\\textit{half}"));
}

#[tokio::test]
async fn inline_items_render_inline() {
    let converter = RecordingConverter::new();

    app(converter.clone())
        .oneshot(post_docx(
            json!({"jsonl": "{\"id\":\"i\",\"latex\":\"a+b\",\"inline\":true}"}),
        ))
        .await
        .unwrap();

    let tex = converter.last_tex();
    assert!(tex.contains("$ a+b $"));
    assert!(!tex.contains("\\begin{equation}"));
}

#[tokio::test]
async fn healthz_is_wired() {
    let response = app(RecordingConverter::new())
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Error taxonomy
// =============================================================================

#[tokio::test]
async fn request_shape_errors_are_rejected_before_parsing() {
    for body in [json!({}), json!({"latex": "x", "jsonl": "{}"})] {
        let converter = RecordingConverter::new();
        let response = app(converter.clone()).oneshot(post_docx(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            detail_of(response).await,
            "Provide exactly one of 'latex' or 'jsonl'."
        );
        assert!(converter.tex_seen.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn empty_jsonl_is_an_empty_batch() {
    let response = app(RecordingConverter::new())
        .oneshot(post_docx(json!({"jsonl": "\n  \n"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(response).await, "Empty JSONL input");
}

#[tokio::test]
async fn malformed_array_is_unprocessable() {
    let response = app(RecordingConverter::new())
        .oneshot(post_docx(json!({"jsonl": "[{\"id\":\"a\",]"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail_of(response).await.starts_with("JSON array parse error:"));
}

#[tokio::test]
async fn non_object_line_is_unprocessable_with_position() {
    let response = app(RecordingConverter::new())
        .oneshot(post_docx(json!({"jsonl": "{\"id\":\"a\"}\n[1,2]"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail_of(response).await, "Line 2: JSON object required");
}

#[tokio::test]
async fn banned_command_rejects_the_whole_batch() {
    let converter = RecordingConverter::new();
    let response = app(converter.clone())
        .oneshot(post_docx(json!({"latex": "x = 1\n\\input{/etc/passwd}"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(response).await,
        "Line 2: Contains banned TeX command"
    );
    // All-or-nothing: the converter never saw a partial document.
    assert!(converter.tex_seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unbalanced_brackets_reject_with_position() {
    let response = app(RecordingConverter::new())
        .oneshot(post_docx(json!({"latex": "\\frac{1}{2"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(response).await, "Line 1: Unbalanced brackets");
}

#[tokio::test]
async fn converter_failure_is_a_server_error() {
    let response = app(RecordingConverter::failing())
        .oneshot(post_docx(json!({"latex": "x = 1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(detail_of(response)
        .await
        .contains("pandoc returned error: missing xelatex"));
}
