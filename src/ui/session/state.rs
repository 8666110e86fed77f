//! State for the rating session lifecycle.

use uuid::Uuid;

use crate::deck::Deck;
use crate::ui::mvi::UiState;

/// Session lifecycle state machine.
///
/// Tracks: nothing requested → fetch in flight → batch loaded (active or
/// complete, derived from the deck cursor) or fetch failed.
/// Every fetch carries a generation; only the current one may land.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No fetch requested yet.
    #[default]
    Idle,

    /// Fetch in flight.
    Loading { generation: u64 },

    /// Batch loaded and being rated.
    Loaded {
        id: Uuid,
        generation: u64,
        deck: Deck,
    },

    /// Fetch failed or returned no cats.
    Failed { generation: u64, message: String },
}

/// Coarse phase shown by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Active,
    Complete,
    Error,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading { .. } => Phase::Loading,
            Self::Loaded { deck, .. } if deck.is_complete() => Phase::Complete,
            Self::Loaded { .. } => Phase::Active,
            Self::Failed { .. } => Phase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Self::Loaded { deck, .. } => Some(deck),
            _ => None,
        }
    }

    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            Self::Loaded { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { generation }
            | Self::Loaded { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
