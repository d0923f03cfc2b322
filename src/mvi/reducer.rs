use super::intent::Intent;
use super::state::UiState;

/// Pure transition table for one piece of state.
///
/// `SessionReducer` drives Home / Study / Results and `AuthorReducer` the
/// new-deck popup. An intent that does not apply to the current state
/// returns it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
