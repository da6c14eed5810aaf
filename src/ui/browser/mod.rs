//! File browser dialog.
//!
//! A minimal directory-listing popup standing in for a desktop file
//! picker: navigate with the arrow keys, Enter descends into a
//! directory or selects a file, Esc closes.

mod dialog;
mod intent;
mod reducer;
mod state;

use std::fs;
use std::io;
use std::path::Path;

pub use dialog::render_browser_dialog;
pub use intent::BrowserIntent;
pub use reducer::BrowserReducer;
pub use state::{BrowserEntry, BrowserState};

/// List a directory for the dialog: parent entry first, then
/// directories, then files, names sorted case-insensitively. Dot
/// files are skipped.
pub fn list_directory(dir: &Path) -> io::Result<Vec<BrowserEntry>> {
    let mut entries = Vec::new();
    if let Some(parent) = dir.parent() {
        entries.push(BrowserEntry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            is_dir: true,
        });
    }

    let mut listed: Vec<BrowserEntry> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                return None;
            }
            let is_dir = entry.file_type().ok()?.is_dir();
            Some(BrowserEntry {
                name,
                path: entry.path(),
                is_dir,
            })
        })
        .collect();
    listed.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    entries.extend(listed);
    Ok(entries)
}
