//! Reducer for the file browser dialog.

use crate::ui::mvi::Reducer;

use super::intent::BrowserIntent;
use super::state::BrowserState;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::Loaded { dir, entries } => BrowserState::Visible {
                dir,
                entries,
                cursor: 0,
            },

            BrowserIntent::MoveCursor { delta } => match state {
                BrowserState::Visible {
                    dir,
                    entries,
                    cursor,
                } => {
                    let last = entries.len().saturating_sub(1) as i64;
                    let cursor = (cursor as i64 + i64::from(delta)).clamp(0, last) as usize;
                    BrowserState::Visible {
                        dir,
                        entries,
                        cursor,
                    }
                }
                other => other,
            },

            BrowserIntent::Close => BrowserState::Hidden,
        }
    }
}
