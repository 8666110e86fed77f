//! Card provider: fetches a batch of candidates from the cat API.
//!
//! The session only depends on the [`CardProvider`] trait; the HTTP
//! implementation lives in [`CatApiClient`].

mod client;
mod error;
mod record;

pub use client::CatApiClient;
pub use error::ProviderError;
pub use record::{candidate_from_record, normalize_batch};

use futures_core::future::BoxFuture;

use crate::deck::Candidate;

/// Source of candidate batches.
pub trait CardProvider: Send + Sync {
    /// Fetch up to `size` candidates, in API order.
    fn fetch_batch(&self, size: usize) -> BoxFuture<'_, Result<Vec<Candidate>, ProviderError>>;
}
