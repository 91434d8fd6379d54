/// System clipboard access.
use arboard::Clipboard;

/// Replace the clipboard contents with `text`.
///
/// # Errors
///
/// Returns `arboard::Error` when no clipboard is available (e.g. a headless
/// session) or the platform rejects the write.
pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)
}
