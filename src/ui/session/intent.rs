//! Intents for the rating session.

use uuid::Uuid;

use crate::deck::{Candidate, Decision};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the session reducer.
#[derive(Debug)]
pub enum SessionIntent {
    /// A new fetch was started; drops the current session.
    BeginFetch { generation: u64 },

    /// Fetch for `generation` returned a batch.
    /// The session id is minted by the caller so the reducer stays pure.
    FetchSucceeded {
        generation: u64,
        session_id: Uuid,
        candidates: Vec<Candidate>,
    },

    /// Fetch for `generation` failed.
    FetchFailed { generation: u64, message: String },

    /// Rate the current candidate.
    Swipe(Decision),

    /// Revert the most recent rating.
    Undo,
}

impl Intent for SessionIntent {}
