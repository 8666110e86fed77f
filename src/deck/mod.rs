//! Rating deck: the candidates of one session and the decisions made on them.
//!
//! ```text
//! candidates: [A, B, C, D]
//!                    ^ cursor (== history.len())
//! history:    [(A, Like), (B, Dislike)]
//! ```

mod candidate;
mod rating;
mod rejected;

pub use candidate::{image_url, Candidate, Decision, HistoryEntry};
pub use rating::Deck;
pub use rejected::Rejected;
