//! Error types for equation parsing and sanitization.

use thiserror::Error;

/// Errors produced while parsing structured (JSONL / JSON array) input.
///
/// Variants carry the 1-based line or element position where the failure
/// occurred so the HTTP layer can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("JSON array parse error: {0}")]
    JsonArray(String),

    #[error("Expected a JSON array or JSONL text")]
    ExpectedArray,

    #[error("JSONL parse error at line {line}: {message}")]
    JsonLine { line: usize, message: String },

    #[error("Line {line}: JSON object required")]
    NotAnObject { line: usize },

    #[error("Empty JSONL input")]
    EmptyBatch,
}

impl ParseError {
    /// True for malformed-input failures (HTTP 422), false for semantic
    /// validation failures (HTTP 400).
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::EmptyBatch)
    }
}

/// Errors produced while sanitizing a single item's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SanitizeError {
    #[error("Contains banned TeX command")]
    BannedCommand,

    #[error("Unbalanced brackets")]
    UnbalancedBrackets,
}
