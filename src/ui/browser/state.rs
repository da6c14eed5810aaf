//! State for the file browser dialog.

use std::path::PathBuf;

use crate::ui::mvi::UiState;

/// One row in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// State of the file browser dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BrowserState {
    #[default]
    Hidden,

    Visible {
        dir: PathBuf,
        entries: Vec<BrowserEntry>,
        cursor: usize,
    },
}

impl UiState for BrowserState {}

impl BrowserState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The entry under the cursor, if any.
    pub fn selected(&self) -> Option<&BrowserEntry> {
        match self {
            Self::Visible {
                entries, cursor, ..
            } => entries.get(*cursor),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(BrowserState::default(), BrowserState::Hidden);
        assert!(!BrowserState::Hidden.is_visible());
    }

    #[test]
    fn selected_follows_cursor() {
        let state = BrowserState::Visible {
            dir: PathBuf::from("/tmp"),
            entries: vec![
                BrowserEntry {
                    name: "a".to_string(),
                    path: PathBuf::from("/tmp/a"),
                    is_dir: false,
                },
                BrowserEntry {
                    name: "b".to_string(),
                    path: PathBuf::from("/tmp/b"),
                    is_dir: false,
                },
            ],
            cursor: 1,
        };
        assert_eq!(state.selected().map(|e| e.name.as_str()), Some("b"));
    }
}
