//! GenerateDocumentHandler - orchestrates one conversion request.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::document::build_document;
use crate::domain::equation::{
    parse_jsonl_mode, parse_text_mode, sanitize_item, EquationItem, ParseError, SanitizeError,
};
use crate::ports::{ConvertError, DocumentConverter};

/// The single batch input, one of the two accepted formats.
#[derive(Debug, Clone)]
pub enum DocxInput {
    /// Raw multi-line LaTeX text, one display expression per line.
    Latex(String),
    /// JSON array or newline-delimited JSON objects.
    Jsonl(String),
}

/// Failures from a conversion request, in detection order. All
/// validation is performed eagerly; the converter is only invoked on a
/// fully sanitized, fully assembled document.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An item failed sanitization, with its 1-based batch position.
    #[error("Line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: SanitizeError,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Handler for generating a docx from a batch of equations.
pub struct GenerateDocumentHandler {
    converter: Arc<dyn DocumentConverter>,
    batch_title: String,
}

impl GenerateDocumentHandler {
    pub fn new(converter: Arc<dyn DocumentConverter>) -> Self {
        Self {
            converter,
            batch_title: "Batch Summary".to_string(),
        }
    }

    /// Overrides the title of the generated summary section.
    pub fn with_batch_title(mut self, title: impl Into<String>) -> Self {
        self.batch_title = title.into();
        self
    }

    /// Runs the full pipeline: parse, sanitize every item (fail-fast,
    /// all-or-nothing), assemble, convert.
    pub async fn handle(&self, input: DocxInput) -> Result<Vec<u8>, GenerateError> {
        // 1. Parse into items
        let items = match input {
            DocxInput::Latex(text) => parse_text_mode(&text),
            DocxInput::Jsonl(text) => parse_jsonl_mode(&text)?,
        };
        debug!(count = items.len(), "parsed equation batch");

        // 2. Sanitize each item; any failure rejects the whole batch
        let sanitized = sanitize_batch(&items)?;

        // 3. Assemble the TeX document
        let tex = build_document(&sanitized, &self.batch_title);

        // 4. Convert externally
        let bytes = self.converter.to_docx(&tex).await?;
        info!(
            count = sanitized.len(),
            size = bytes.len(),
            "generated docx for equation batch"
        );
        Ok(bytes)
    }
}

/// Sanitizes all items, failing on the first offender with its 1-based
/// position.
fn sanitize_batch(items: &[EquationItem]) -> Result<Vec<EquationItem>, GenerateError> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            sanitize_item(item).map_err(|source| GenerateError::Invalid {
                line: idx + 1,
                source,
            })
        })
        .collect()
}
