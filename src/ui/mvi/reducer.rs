//! Reducer trait and in-place dispatch helper.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// All derived fields are recomputed inside `reduce`, so a state value is
/// consistent the moment it is returned. Same inputs always produce the
/// same output, which is what makes the transition table testable.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Runs `R` against a state slot, replacing the slot with the result.
pub fn apply<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
