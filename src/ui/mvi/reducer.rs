//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// `reduce` must be a pure function `(State, Intent) -> State` with no
/// side effects; rejected transitions return the input state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
