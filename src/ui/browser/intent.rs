//! Intents for the file browser dialog.

use std::path::PathBuf;

use crate::ui::mvi::Intent;

use super::state::BrowserEntry;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// Show the dialog with a freshly listed directory.
    Loaded {
        dir: PathBuf,
        entries: Vec<BrowserEntry>,
    },

    /// Move the cursor by `delta`, clamped to the listing.
    MoveCursor { delta: i32 },

    /// Hide the dialog.
    Close,
}

impl Intent for BrowserIntent {}
