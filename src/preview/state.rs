//! State of the document preview.

use crate::ui::mvi::UiState;

/// Smallest allowed zoom scale.
pub const SCALE_MIN: f32 = 0.5;

/// Largest allowed zoom scale.
pub const SCALE_MAX: f32 = 3.0;

/// Scale applied when a PDF is first opened.
pub const DEFAULT_SCALE: f32 = 1.2;

/// Scale change per zoom step.
pub const ZOOM_STEP: f32 = 0.2;

/// The current preview, exactly one variant active.
///
/// `current_page` and `scale` are only meaningful in the `Pdf`
/// variant; any variant transition resets them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    /// Nothing selected yet.
    #[default]
    Empty,

    /// A selection was made and its decode is pending.
    Loading,

    /// A decoded PDF with pagination/zoom sub-state.
    Pdf {
        page_count: u16,
        current_page: u16,
        scale: f32,
    },

    /// A decoded plain-text file.
    Text {
        content: String,
        char_count: usize,
        line_count: usize,
    },

    /// A file in a format the preview does not handle.
    Unsupported,

    /// Decode failed; terminal for this document.
    Error { message: String },
}

impl UiState for PreviewState {}

impl PreviewState {
    pub fn is_pdf(&self) -> bool {
        matches!(self, Self::Pdf { .. })
    }

    /// Current page and page count, when a PDF is shown.
    pub fn page_position(&self) -> Option<(u16, u16)> {
        match self {
            Self::Pdf {
                current_page,
                page_count,
                ..
            } => Some((*current_page, *page_count)),
            _ => None,
        }
    }

    pub fn scale(&self) -> Option<f32> {
        match self {
            Self::Pdf { scale, .. } => Some(*scale),
            _ => None,
        }
    }

    /// "Previous page" is meaningful and enabled.
    pub fn can_page_back(&self) -> bool {
        matches!(self, Self::Pdf { current_page, .. } if *current_page > 1)
    }

    /// "Next page" is meaningful and enabled.
    pub fn can_page_forward(&self) -> bool {
        matches!(
            self,
            Self::Pdf { current_page, page_count, .. } if current_page < page_count
        )
    }
}
