//! Reducer for the summarization request lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::RequestState;

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = RequestState;
    type Intent = SummarizeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A start while in flight stays in flight; the controller
            // additionally refuses to issue a second network call.
            SummarizeIntent::Start => RequestState::InFlight,

            SummarizeIntent::Finished { result } => match result {
                Ok(summary) => RequestState::Succeeded { summary },
                Err(message) => RequestState::Failed { message },
            },
        }
    }
}
