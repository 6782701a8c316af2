//! External converter configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Pandoc converter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// Path to the pandoc executable; searches PATH when unset
    pub pandoc_path: Option<String>,

    /// Secondary location probed when the primary binary is missing
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,

    /// Timeout for one conversion in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Directory for per-request temp files
    #[serde(default = "default_workspace_dir")]
    pub workspace_dir: String,
}

impl ConverterConfig {
    /// Validate converter configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidConverterTimeout);
        }
        if self.workspace_dir.is_empty() {
            return Err(ValidationError::EmptyWorkspaceDir);
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            fallback_path: default_fallback_path(),
            timeout_secs: default_timeout(),
            workspace_dir: default_workspace_dir(),
        }
    }
}

fn default_fallback_path() -> String {
    "/usr/local/bin/pandoc".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_workspace_dir() -> String {
    ".equationshot_tmp".to_string()
}
