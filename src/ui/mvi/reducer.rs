//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All session transitions go through a reducer: (State, Intent) -> State.
/// Side effects (spawning fetches, minting ids, logging) stay with the caller.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and return the next one.
    ///
    /// Intents that do not apply to the current state return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
