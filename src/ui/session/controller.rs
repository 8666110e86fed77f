//! Owner of the rating session.

use uuid::Uuid;

use crate::deck::{Candidate, Decision, Deck, HistoryEntry, Rejected};
use crate::provider::ProviderError;
use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::{Phase, SessionState};

pub const EMPTY_BATCH_MESSAGE: &str = "The cat API returned no cats";

/// Handle for a fetch the caller must run and report back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
}

/// The single live session.
///
/// Validates preconditions and reports them as [`Rejected`], then hands the
/// transition to [`SessionReducer`]. A rejected call leaves state untouched.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.state.deck()
    }

    /// Generation of the most recently started fetch (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.state = SessionReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Starts a fetch under a new generation.
    ///
    /// Rejected while another fetch is in flight.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, Rejected> {
        if self.state.is_loading() {
            return Err(Rejected::FetchInFlight);
        }
        self.generation += 1;
        let generation = self.generation;
        self.dispatch(SessionIntent::BeginFetch { generation });
        tracing::debug!(generation, "Fetch started");
        Ok(FetchTicket { generation })
    }

    /// Drops all ratings and starts a fresh fetch.
    pub fn reset(&mut self) -> Result<FetchTicket, Rejected> {
        if let Some(deck) = self.deck() {
            tracing::info!(
                rated = deck.cursor(),
                liked = deck.liked_count(),
                "Resetting session"
            );
        }
        self.begin_fetch()
    }

    /// Applies the outcome of the fetch tagged `generation`.
    ///
    /// Results from any fetch other than the one in flight are discarded.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Candidate>, ProviderError>,
    ) -> Result<(), Rejected> {
        if generation != self.generation || !self.state.is_loading() {
            tracing::warn!(
                generation,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return Err(Rejected::StaleGeneration {
                got: generation,
                current: self.generation,
            });
        }

        match result {
            Ok(candidates) => {
                let session_id = Uuid::new_v4();
                tracing::info!(
                    generation,
                    session = %session_id,
                    count = candidates.len(),
                    "Batch loaded"
                );
                self.dispatch(SessionIntent::FetchSucceeded {
                    generation,
                    session_id,
                    candidates,
                });
            }
            Err(err) => {
                tracing::warn!(
                    generation,
                    error_type = err.error_type(),
                    error = %err,
                    "Fetch failed"
                );
                self.dispatch(SessionIntent::FetchFailed {
                    generation,
                    message: err.user_message().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Rates the current candidate.
    pub fn swipe(&mut self, decision: Decision) -> Result<(), Rejected> {
        match self.phase() {
            Phase::Active => {}
            Phase::Complete => return Err(Rejected::Exhausted),
            Phase::Idle | Phase::Loading | Phase::Error => return Err(Rejected::NotLoaded),
        }
        self.dispatch(SessionIntent::Swipe(decision));
        Ok(())
    }

    /// Reverts the most recent rating and returns it.
    pub fn undo(&mut self) -> Result<HistoryEntry, Rejected> {
        let deck = self.deck().ok_or(Rejected::NotLoaded)?;
        let entry = deck.history().last().cloned().ok_or(Rejected::NothingToUndo)?;
        self.dispatch(SessionIntent::Undo);
        Ok(entry)
    }
}
