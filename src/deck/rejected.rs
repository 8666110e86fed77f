use thiserror::Error;

/// Status returned when an operation is refused.
///
/// A rejected operation never changes session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("No cats left to rate")]
    Exhausted,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("No cats loaded")]
    NotLoaded,

    #[error("Already fetching cats")]
    FetchInFlight,

    /// A fetch result arrived for a generation that is no longer current.
    #[error("Stale fetch result (generation {got}, current {current})")]
    StaleGeneration { got: u64, current: u64 },
}
