//! Clipboard backends for per-row and bulk copy
//!
//! The system clipboard is reached through whichever clipboard utility is on
//! `PATH`. When it is missing or fails, one fallback is tried (a file on
//! disk), after which the copy is given up silently.

use crate::config::ClipboardConfig;
use crate::domain::{ExporterError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard utilities probed in order, with the arguments that make them read stdin
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// A destination for copied text
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, text: &str) -> Result<()>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// System clipboard driven by an external utility
///
/// # Examples
///
/// ```no_run
/// use url_exporter::presentation::clipboard::{Clipboard, CommandClipboard};
///
/// # async fn example() -> url_exporter::domain::Result<()> {
/// if let Some(clipboard) = CommandClipboard::from_path() {
///     clipboard.copy("https://example.com/hello-world").await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    binary_path: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Create a clipboard backed by an explicit binary
    pub fn new(binary_path: PathBuf, args: Vec<String>) -> Self {
        Self { binary_path, args }
    }

    /// Find the first known clipboard utility on `PATH`
    pub fn from_path() -> Option<Self> {
        CLIPBOARD_COMMANDS.iter().find_map(|(name, args)| {
            which::which(name).ok().map(|path| {
                tracing::debug!(binary = %path.display(), "Found clipboard utility");
                Self::new(path, args.iter().map(|a| a.to_string()).collect())
            })
        })
    }

    pub fn binary_path(&self) -> &PathBuf {
        &self.binary_path
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.binary_path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ExporterError::Clipboard(format!(
                    "Failed to run {}: {e}",
                    self.binary_path.display()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ExporterError::Clipboard(format!("Failed to write to clipboard: {e}")))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ExporterError::Clipboard(format!("Clipboard utility failed: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(ExporterError::Clipboard(format!(
                "{} exited with {status}",
                self.binary_path.display()
            )))
        }
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// Fallback that writes copied text to a file
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Primary clipboard plus a single fallback
#[derive(Clone, Default)]
pub struct CopyService {
    primary: Option<Arc<dyn Clipboard>>,
    fallback: Option<Arc<dyn Clipboard>>,
}

impl CopyService {
    pub fn new(primary: Option<Arc<dyn Clipboard>>, fallback: Option<Arc<dyn Clipboard>>) -> Self {
        Self { primary, fallback }
    }

    /// System clipboard if one is installed, file fallback if configured
    pub fn from_config(config: &ClipboardConfig) -> Self {
        let primary = CommandClipboard::from_path().map(|c| Arc::new(c) as Arc<dyn Clipboard>);
        let fallback = config
            .fallback_path
            .as_ref()
            .map(|path| Arc::new(FileClipboard::new(path)) as Arc<dyn Clipboard>);

        if primary.is_none() {
            tracing::debug!("No clipboard utility found on PATH");
        }

        Self { primary, fallback }
    }

    /// Copy `text`, returning whether any backend accepted it
    ///
    /// Failures are logged and swallowed; the caller only decides whether
    /// to show the "copied" feedback.
    pub async fn copy(&self, text: &str) -> bool {
        if let Some(primary) = &self.primary {
            match primary.copy(text).await {
                Ok(()) => return true,
                Err(e) => {
                    tracing::debug!(backend = primary.name(), error = %e, "Copy failed; trying fallback");
                }
            }
        }

        let Some(fallback) = &self.fallback else {
            return false;
        };

        match fallback.copy(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(backend = fallback.name(), error = %e, "Fallback copy failed");
                false
            }
        }
    }
}
