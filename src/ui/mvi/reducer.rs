//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Consume the previous state and an intent, returning the replacement.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
