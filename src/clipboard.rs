//! Clipboard export of a rendered summary.
//!
//! A rendered summary may carry line-break markup and entity escapes
//! from the service; `normalize_rendered` turns it back into plain
//! text before the write. The write itself tries the system clipboard
//! first and falls back to the OSC 52 terminal escape, which hands the
//! payload to the terminal emulator when no display clipboard is
//! reachable (SSH, headless). Failures never leave this module.

use std::io::Write;

use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static BR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line-break pattern"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Normalize rendered markup to plain text: line-break tags to
/// newlines, remaining tags stripped, the five standard entities
/// decoded, surrounding whitespace trimmed.
///
/// Idempotent: an already-plain string comes back unchanged.
pub fn normalize_rendered(rendered: &str) -> String {
    let text = BR_TAG.replace_all(rendered, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

/// Outcome of one copy attempt, shown as transient button feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Handler for clipboard writes.
pub struct ClipboardHandler {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!(error = %e, "system clipboard unavailable, will use OSC 52");
                None
            }
        };
        Self { clipboard }
    }

    /// Write already-normalized text. Tries the system clipboard,
    /// then the OSC 52 escape; reports the outcome and nothing else.
    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text.to_string()) {
                Ok(()) => return CopyOutcome::Copied,
                Err(e) => warn!(error = %e, "clipboard write failed, trying OSC 52"),
            }
        }
        osc52_copy(text)
    }
}

impl Default for ClipboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand the text to the terminal emulator via OSC 52. Written straight
/// to stdout, bypassing the draw buffer.
fn osc52_copy(text: &str) -> CopyOutcome {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let mut stdout = std::io::stdout();
    let sequence = format!("\x1b]52;c;{}\x07", encoded);
    match stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
    {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "OSC 52 write failed");
            CopyOutcome::Failed
        }
    }
}
