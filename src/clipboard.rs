//! Clipboard - export text copy support.
//!
//! Copies go to an internal buffer first (always succeeds, keeps the UI's
//! "copied" feedback honest) and then to the system clipboard on a
//! best-effort basis. A system clipboard failure is logged and otherwise
//! ignored: no retry, no user-facing error state.
//!
//! # Example
//!
//! ```ignore
//! use concentric::clipboard;
//!
//! clipboard::copy("30px");
//! assert_eq!(clipboard::contents().as_deref(), Some("30px"));
//! ```

use std::cell::RefCell;

// =============================================================================
// Internal buffer
// =============================================================================

thread_local! {
    /// Most recently copied text. Source of truth for the UI; the system
    /// clipboard mirror may silently fail (headless terminals, no display).
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = RefCell::new(None);
}

// =============================================================================
// Public API
// =============================================================================

/// Copy text to the clipboard.
///
/// Empty strings are ignored (buffer not modified). The system clipboard
/// write is best-effort.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }

    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = Some(text.to_string());
    });

    copy_to_system(text);
}

/// The most recently copied text, if any.
pub fn contents() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Check if anything has been copied.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().is_some())
}

/// Clear the internal buffer.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = None;
    });
}

// =============================================================================
// System clipboard
// =============================================================================

fn copy_to_system(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::debug!("system clipboard write failed: {err}");
            }
        }
        Err(err) => {
            log::debug!("system clipboard unavailable: {err}");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
