//! Pure preview transitions, including the pagination/zoom clamps.

use crate::ui::mvi::Reducer;

use super::intent::PreviewIntent;
use super::state::{PreviewState, DEFAULT_SCALE, SCALE_MAX, SCALE_MIN};

/// Tolerance for accumulated float steps at the zoom bounds.
const SCALE_EPSILON: f32 = 1e-3;

pub struct PreviewReducer;

impl Reducer for PreviewReducer {
    type State = PreviewState;
    type Intent = PreviewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PreviewIntent::Selected => PreviewState::Loading,

            PreviewIntent::PdfReady { page_count } => PreviewState::Pdf {
                page_count: page_count.max(1),
                current_page: 1,
                scale: DEFAULT_SCALE,
            },

            PreviewIntent::TextReady {
                content,
                char_count,
                line_count,
            } => PreviewState::Text {
                content,
                char_count,
                line_count,
            },

            PreviewIntent::UnsupportedSelected => PreviewState::Unsupported,

            PreviewIntent::DecodeFailed { message } => PreviewState::Error { message },

            PreviewIntent::ChangePage { delta } => match state {
                PreviewState::Pdf {
                    page_count,
                    current_page,
                    scale,
                } => {
                    let new_page = i64::from(current_page) + i64::from(delta);
                    if new_page >= 1 && new_page <= i64::from(page_count) {
                        PreviewState::Pdf {
                            page_count,
                            current_page: new_page as u16,
                            scale,
                        }
                    } else {
                        PreviewState::Pdf {
                            page_count,
                            current_page,
                            scale,
                        }
                    }
                }
                other => other,
            },

            PreviewIntent::ChangeZoom { delta } => match state {
                PreviewState::Pdf {
                    page_count,
                    current_page,
                    scale,
                } => {
                    let new_scale = scale + delta;
                    if new_scale >= SCALE_MIN - SCALE_EPSILON
                        && new_scale <= SCALE_MAX + SCALE_EPSILON
                    {
                        PreviewState::Pdf {
                            page_count,
                            current_page,
                            scale: new_scale.clamp(SCALE_MIN, SCALE_MAX),
                        }
                    } else {
                        PreviewState::Pdf {
                            page_count,
                            current_page,
                            scale,
                        }
                    }
                }
                other => other,
            },
        }
    }
}
