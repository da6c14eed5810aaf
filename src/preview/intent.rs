//! Intents driving preview transitions.

use crate::ui::mvi::Intent;

/// Transitions requested by the session controller.
#[derive(Debug, Clone)]
pub enum PreviewIntent {
    /// A new file was selected; decode is pending. Resets any prior
    /// pagination sub-state.
    Selected,

    /// PDF decode finished with a page collection.
    PdfReady { page_count: u16 },

    /// Text decode finished.
    TextReady {
        content: String,
        char_count: usize,
        line_count: usize,
    },

    /// The selected file is in an unsupported format.
    UnsupportedSelected,

    /// Decode failed; terminal for this document.
    DecodeFailed { message: String },

    /// Move `delta` pages; out-of-range moves are silently ignored.
    ChangePage { delta: i32 },

    /// Adjust zoom by `delta`; out-of-range results are silently
    /// ignored.
    ChangeZoom { delta: f32 },
}

impl Intent for PreviewIntent {}
