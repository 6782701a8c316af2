//! Document Converter Port - external TeX-to-docx conversion interface.
//!
//! The application layer depends on this trait; the Pandoc adapter
//! provides the implementation. By the time a document reaches this port
//! it is fully sanitized and assembled, so any failure here is a
//! server-side failure, never a validation one.

use async_trait::async_trait;
use thiserror::Error;

/// Port for converting an assembled TeX document to docx bytes.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Converts TeX source to a complete Office Open XML word-processing
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` if the converter binary is unavailable,
    /// exits non-zero, times out, or produces no output.
    async fn to_docx(&self, tex: &str) -> Result<Vec<u8>, ConvertError>;

    /// Checks whether the converter is installed and responding. Used by
    /// health checks.
    async fn is_available(&self) -> bool;
}

/// Errors from the external conversion step.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter binary could not be found, including via the
    /// fallback path.
    #[error("converter unavailable: {0}")]
    Unavailable(String),

    /// The converter ran but failed, with captured diagnostics.
    #[error("conversion failed: {0}")]
    Failed(String),

    /// The converter did not finish within the configured bound.
    #[error("conversion timed out after {0}s")]
    Timeout(u64),

    /// Temp-file I/O around the conversion failed.
    #[error("conversion I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        ConvertError::Unavailable(msg.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        ConvertError::Failed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_context() {
        assert_eq!(
            ConvertError::unavailable("pandoc not found").to_string(),
            "converter unavailable: pandoc not found"
        );
        assert_eq!(
            ConvertError::failed("exit status 1").to_string(),
            "conversion failed: exit status 1"
        );
        assert_eq!(
            ConvertError::Timeout(30).to_string(),
            "conversion timed out after 30s"
        );
    }
}
