//! Pandoc-based document converter adapter.
//!
//! Implements the `DocumentConverter` port with a file-in/file-out
//! contract: the TeX source is written to a workspace file, pandoc is
//! invoked on it, and the resulting docx bytes are read back. Temp files
//! are named with a per-request UUID token so concurrent requests can
//! never collide, and the child process runs under a hard timeout.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ports::{ConvertError, DocumentConverter};

/// Converter shelling out to Pandoc.
///
/// Pandoc must be installed on the system. If the primary command cannot
/// be found, one fallback location is probed before giving up.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    /// Path to the pandoc executable. If None, searches PATH.
    pandoc_path: Option<String>,

    /// Secondary location probed when the primary command is missing.
    fallback_path: String,

    /// Timeout for one conversion in seconds.
    timeout_secs: u64,

    /// Directory for per-request TeX and docx temp files.
    workspace_dir: PathBuf,
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PandocConverter {
    /// Creates a converter with default settings: `pandoc` from PATH,
    /// `/usr/local/bin/pandoc` as fallback, 30s timeout, and a
    /// `.equationshot_tmp` workspace under the working directory.
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            fallback_path: "/usr/local/bin/pandoc".to_string(),
            timeout_secs: 30,
            workspace_dir: PathBuf::from(".equationshot_tmp"),
        }
    }

    /// Sets a custom path to the pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Sets the fallback executable location.
    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    /// Sets the conversion timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets the temp-file workspace directory.
    pub fn with_workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_dir = dir.into();
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Unique per-request (tex, docx) paths inside the workspace.
    fn temp_paths(&self) -> (PathBuf, PathBuf) {
        let token = Uuid::new_v4().simple().to_string();
        (
            self.workspace_dir.join(format!("eq_{token}.tex")),
            self.workspace_dir.join(format!("equations_{token}.docx")),
        )
    }

    /// Spawns `<cmd> <tex> -o <docx>`, falling back once to the
    /// configured secondary location when the primary binary is missing.
    fn spawn_pandoc(&self, tex_path: &Path, docx_path: &Path) -> Result<tokio::process::Child, ConvertError> {
        match self.spawn_with(self.pandoc_command(), tex_path, docx_path) {
            Ok(child) => Ok(child),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    primary = self.pandoc_command(),
                    fallback = %self.fallback_path,
                    "pandoc not found, probing fallback location"
                );
                self.spawn_with(&self.fallback_path, tex_path, docx_path)
                    .map_err(|_| {
                        ConvertError::unavailable(
                            "pandoc not found and fallback location failed. Please install pandoc.",
                        )
                    })
            }
            Err(e) => Err(ConvertError::Io(e)),
        }
    }

    fn spawn_with(
        &self,
        cmd: &str,
        tex_path: &Path,
        docx_path: &Path,
    ) -> std::io::Result<tokio::process::Child> {
        Command::new(cmd)
            .arg(tex_path)
            .arg("-o")
            .arg(docx_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
    }

    async fn run_conversion(
        &self,
        tex_path: &Path,
        docx_path: &Path,
    ) -> Result<Vec<u8>, ConvertError> {
        let child = self.spawn_pandoc(tex_path, docx_path)?;

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ConvertError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::failed(format!(
                "pandoc returned error: {}",
                stderr.trim()
            )));
        }

        if tokio::fs::metadata(docx_path).await.is_err() {
            return Err(ConvertError::failed("pandoc did not produce output"));
        }

        Ok(tokio::fs::read(docx_path).await?)
    }
}

#[async_trait]
impl DocumentConverter for PandocConverter {
    async fn to_docx(&self, tex: &str) -> Result<Vec<u8>, ConvertError> {
        tokio::fs::create_dir_all(&self.workspace_dir).await?;

        let (tex_path, docx_path) = self.temp_paths();
        tokio::fs::write(&tex_path, tex).await?;
        debug!(tex = %tex_path.display(), "wrote TeX source for conversion");

        let result = self.run_conversion(&tex_path, &docx_path).await;

        // Best-effort cleanup on both success and failure paths.
        let _ = tokio::fs::remove_file(&tex_path).await;
        let _ = tokio::fs::remove_file(&docx_path).await;

        result
    }

    async fn is_available(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}
