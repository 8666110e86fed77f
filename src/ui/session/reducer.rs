//! Reducer for the rating session.

use crate::deck::Deck;
use crate::ui::mvi::Reducer;

use super::controller::EMPTY_BATCH_MESSAGE;
use super::intent::SessionIntent;
use super::state::SessionState;

/// Reducer for session state transitions.
///
/// Pure function: fetch results for any generation other than the one in
/// flight, swipes on a finished deck and undos on an empty history all leave
/// the state untouched. Precondition reporting is done by [`super::Session`].
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::BeginFetch { generation } => SessionState::Loading { generation },

            SessionIntent::FetchSucceeded {
                generation,
                session_id,
                candidates,
            } => match state {
                SessionState::Loading { generation: current } if current == generation => {
                    if candidates.is_empty() {
                        SessionState::Failed {
                            generation,
                            message: EMPTY_BATCH_MESSAGE.to_string(),
                        }
                    } else {
                        SessionState::Loaded {
                            id: session_id,
                            generation,
                            deck: Deck::new(candidates),
                        }
                    }
                }
                other => other,
            },

            SessionIntent::FetchFailed {
                generation,
                message,
            } => match state {
                SessionState::Loading { generation: current } if current == generation => {
                    SessionState::Failed {
                        generation,
                        message,
                    }
                }
                other => other,
            },

            SessionIntent::Swipe(decision) => match state {
                SessionState::Loaded {
                    id,
                    generation,
                    mut deck,
                } => {
                    if let Err(rejected) = deck.swipe(decision) {
                        tracing::debug!(%rejected, "Swipe ignored");
                    }
                    SessionState::Loaded {
                        id,
                        generation,
                        deck,
                    }
                }
                other => other,
            },

            SessionIntent::Undo => match state {
                SessionState::Loaded {
                    id,
                    generation,
                    mut deck,
                } => {
                    if let Err(rejected) = deck.undo() {
                        tracing::debug!(%rejected, "Undo ignored");
                    }
                    SessionState::Loaded {
                        id,
                        generation,
                        deck,
                    }
                }
                other => other,
            },
        }
    }
}
