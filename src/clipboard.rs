use crate::error::{Result, TaskcatError};

/// Put `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| TaskcatError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| TaskcatError::Clipboard(e.to_string()))?;
    tracing::debug!(len = text.len(), "copied to clipboard");
    Ok(())
}
