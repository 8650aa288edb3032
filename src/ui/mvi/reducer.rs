use super::intent::Intent;
use super::state::UiState;

/// The only place a page's state changes.
///
/// `reduce` must not perform I/O. The caller inspects the returned state to
/// decide whether a request needs to go out.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
