//! HTTP DTOs for the equation conversion endpoints.

use serde::{Deserialize, Serialize};

use crate::application::DocxInput;

/// Request body for `POST /api/docx`. Exactly one of the two fields must
/// carry a non-empty value.
#[derive(Debug, Clone, Deserialize)]
pub struct DocxRequest {
    /// Raw LaTeX text, one display expression per line.
    #[serde(default)]
    pub latex: Option<String>,
    /// JSON array or newline-delimited JSON objects.
    #[serde(default)]
    pub jsonl: Option<String>,
}

impl DocxRequest {
    /// Resolves the request into its single input mode.
    ///
    /// Empty strings count as absent, matching the lenient form-paste
    /// behavior of the endpoint: providing both or neither is a request
    /// shape error.
    pub fn into_input(self) -> Result<DocxInput, RequestShapeError> {
        let latex = self.latex.filter(|s| !s.is_empty());
        let jsonl = self.jsonl.filter(|s| !s.is_empty());
        match (latex, jsonl) {
            (Some(latex), None) => Ok(DocxInput::Latex(latex)),
            (None, Some(jsonl)) => Ok(DocxInput::Jsonl(jsonl)),
            _ => Err(RequestShapeError),
        }
    }
}

/// Both or neither input fields were provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Provide exactly one of 'latex' or 'jsonl'.")]
pub struct RequestShapeError;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
