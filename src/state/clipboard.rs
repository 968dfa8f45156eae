//! Clipboard access for copying transaction hashes.
//!
//! On Linux, external tools (`wl-copy`, `xclip`, `xsel`) are tried first
//! because their selection outlives the process; everything else goes
//! through `arboard`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError`] when no clipboard backend accepts the text.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "linux")]
    if copy_with_external_tool(text) {
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
fn copy_with_external_tool(text: &str) -> bool {
    const TOOLS: [(&str, &[&str]); 3] = [
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    TOOLS
        .iter()
        .any(|(tool, args)| try_tool(tool, args, text))
}

#[cfg(target_os = "linux")]
fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };
    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    drop(stdin);

    child.wait().map(|status| status.success()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("denied".into()).to_string(),
            "Failed to copy: denied"
        );
    }
}
