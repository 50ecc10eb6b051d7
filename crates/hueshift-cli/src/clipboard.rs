//! Clipboard access through platform helper commands.

use std::sync::Mutex;
use std::time::Duration;

use crate::error::ShellError;
use crate::shell;

/// Default seconds a clipboard helper may run.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    fn copy(&self, text: &str) -> Result<(), ShellError>;

    /// Current clipboard text; `None` when the clipboard is empty.
    fn paste(&self) -> Result<Option<String>, ShellError>;
}

#[cfg(target_os = "macos")]
fn platform_commands() -> Option<(&'static str, &'static str)> {
    Some(("pbcopy", "pbpaste"))
}

#[cfg(target_os = "linux")]
fn platform_commands() -> Option<(&'static str, &'static str)> {
    Some(("xclip -selection clipboard", "xclip -selection clipboard -o"))
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn platform_commands() -> Option<(&'static str, &'static str)> {
    None
}

/// Clipboard backed by shell commands (`pbcopy`/`pbpaste`, `xclip`).
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    copy_command: Option<String>,
    paste_command: Option<String>,
    timeout: Duration,
}

impl SystemClipboard {
    /// Platform commands, with `copy_command` replacing the copy helper when set.
    pub fn new(copy_command: Option<String>, timeout: Duration) -> Self {
        let defaults = platform_commands();
        Self {
            copy_command: copy_command.or_else(|| defaults.map(|(copy, _)| copy.to_string())),
            paste_command: defaults.map(|(_, paste)| paste.to_string()),
            timeout,
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new(None, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ShellError> {
        let command = self.copy_command.as_deref().ok_or(ShellError::Unsupported)?;
        shell::run(command, Some(text), self.timeout)?;
        tracing::info!(command, bytes = text.len(), "copied output to clipboard");
        Ok(())
    }

    fn paste(&self) -> Result<Option<String>, ShellError> {
        let command = self.paste_command.as_deref().ok_or(ShellError::Unsupported)?;
        let text = shell::run(command, None, self.timeout)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

/// In-memory clipboard for tests.
#[derive(Debug, Default)]
pub struct MockClipboard {
    content: Mutex<Option<String>>,
}

impl MockClipboard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(content.into())),
        }
    }

    /// What the last copy left behind.
    pub fn contents(&self) -> Option<String> {
        self.content.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Clipboard for MockClipboard {
    fn copy(&self, text: &str) -> Result<(), ShellError> {
        if let Ok(mut content) = self.content.lock() {
            *content = Some(text.to_string());
        }
        Ok(())
    }

    fn paste(&self) -> Result<Option<String>, ShellError> {
        Ok(self.contents().filter(|c| !c.is_empty()))
    }
}
