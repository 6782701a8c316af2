//! HTTP handlers for the equation conversion endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::{GenerateDocumentHandler, GenerateError};

use super::dto::{DocxRequest, ErrorResponse};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Shared state for the equation endpoints.
#[derive(Clone)]
pub struct EquationAppState {
    generate_handler: Arc<GenerateDocumentHandler>,
}

impl EquationAppState {
    pub fn new(generate_handler: Arc<GenerateDocumentHandler>) -> Self {
        Self { generate_handler }
    }
}

/// POST /api/docx - Convert a batch of equations to a docx download
pub async fn generate_docx(
    State(state): State<EquationAppState>,
    Json(req): Json<DocxRequest>,
) -> Response {
    let input = match req.into_input() {
        Ok(input) => input,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    };

    match state.generate_handler.handle(input).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=equations.docx",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => generate_error_response(e),
    }
}

/// GET /healthz - Liveness probe
pub async fn healthz() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

/// GET / - Embedded single-page form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Maps the error taxonomy onto status codes: 422 for malformed
/// structured input, 400 for semantic validation failures, 500 for
/// external converter failures.
fn generate_error_response(err: GenerateError) -> Response {
    let status = match &err {
        GenerateError::Parse(parse) if parse.is_malformed() => StatusCode::UNPROCESSABLE_ENTITY,
        GenerateError::Parse(_) | GenerateError::Invalid { .. } => StatusCode::BAD_REQUEST,
        GenerateError::Convert(convert) => {
            error!(error = %convert, "document conversion failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>EquationShot</title>
  <style>
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 24px; }
    textarea { width: 100%; height: 240px; font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
    .row { display: flex; gap: 16px; align-items: center; }
    .row > * { margin: 8px 0; }
    .small { color: #666; font-size: 12px; }
    fieldset { border: 1px solid #ddd; padding: 12px; }
    legend { color: #444; }
    button { padding: 8px 16px; font-weight: 600; }
    .status { margin-top: 8px; min-height: 1.2em; }
  </style>
  <script>
    async function submitForm(ev) {
      ev.preventDefault();
      const mode = document.querySelector('input[name="mode"]:checked').value;
      const text = document.getElementById('input').value;
      const status = document.getElementById('status');
      status.textContent = 'Generating…';
      try {
        const payload = mode === 'jsonl' ? { jsonl: text } : { latex: text };
        const res = await fetch('/api/docx', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          const err = await res.json().catch(() => ({}));
          status.textContent = 'Error: ' + (err.detail || res.statusText);
          return;
        }
        const blob = await res.blob();
        const url = URL.createObjectURL(blob);
        const a = document.createElement('a');
        a.href = url;
        a.download = 'equations.docx';
        a.click();
        URL.revokeObjectURL(url);
        status.textContent = 'Downloaded equations.docx.';
      } catch (e) {
        status.textContent = 'Error: ' + e.message;
      }
    }
  </script>
  </head>
  <body>
    <h1>EquationShot</h1>
    <p class="small">Paste JSONL records or plain LaTeX lines and generate a .docx. Requires Pandoc on the server.</p>
    <form onsubmit="submitForm(event)">
      <fieldset>
        <legend>Mode</legend>
        <label><input type="radio" name="mode" value="jsonl" checked /> JSONL</label>
        <label><input type="radio" name="mode" value="text" /> Text</label>
      </fieldset>
      <div class="row">
        <textarea id="input" placeholder="JSONL example:
{&quot;id&quot;:&quot;jac&quot;,&quot;latex&quot;:&quot;\\operatorname{Jaccard}(A,B)=...&quot;,&quot;caption&quot;:&quot;Jaccard similarity&quot;,&quot;inline&quot;:false}
{&quot;id&quot;:&quot;bayes&quot;,&quot;latex&quot;:&quot;P(A\\mid B)=...&quot;,&quot;inline&quot;:false}"></textarea>
      </div>
      <div class="row">
        <button type="submit">Generate .docx</button>
        <span id="status" class="status"></span>
      </div>
    </form>
  </body>
</html>
"#;
