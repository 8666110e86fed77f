use std::collections::BTreeSet;

use super::candidate::{Candidate, Decision, HistoryEntry};
use super::rejected::Rejected;

/// Candidates of one session plus the decisions made so far.
///
/// The cursor is the history length, so `len(history) == cursor` holds by
/// construction. Liked/disliked views are derived from the history on read
/// and cannot drift from it, even if the batch carried duplicate ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    candidates: Vec<Candidate>,
    history: Vec<HistoryEntry>,
}

impl Deck {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            history: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the next unrated candidate.
    pub fn cursor(&self) -> usize {
        self.history.len()
    }

    /// The candidate under the cursor, if any are left.
    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor())
    }

    pub fn is_complete(&self) -> bool {
        !self.candidates.is_empty() && self.cursor() == self.candidates.len()
    }

    pub fn total_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor())
    }

    /// Number of like decisions in the history.
    ///
    /// Equals `liked().len()` while identifiers are unique. If the same id
    /// was liked twice this counts both ratings, so that
    /// `liked_count() + disliked_count() == cursor()` keeps holding.
    pub fn liked_count(&self) -> usize {
        self.decided(Decision::Like).count()
    }

    pub fn disliked_count(&self) -> usize {
        self.cursor().saturating_sub(self.liked_count())
    }

    /// Distinct identifiers of liked candidates. Repeated ids collapse to one
    /// entry, unlike [`Deck::liked_count`].
    pub fn liked(&self) -> BTreeSet<&str> {
        self.decided(Decision::Like)
            .map(|candidate| candidate.id.as_str())
            .collect()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.decided(Decision::Like).any(|candidate| candidate.id == id)
    }

    /// Candidates with the given decision, in rating order.
    pub fn decided(&self, decision: Decision) -> impl Iterator<Item = &Candidate> + '_ {
        self.history
            .iter()
            .filter(move |entry| entry.decision == decision)
            .map(|entry| &entry.candidate)
    }

    /// Rates the current candidate and advances the cursor.
    pub fn swipe(&mut self, decision: Decision) -> Result<&HistoryEntry, Rejected> {
        let candidate = self.current().cloned().ok_or(Rejected::Exhausted)?;
        self.history.push(HistoryEntry {
            candidate,
            decision,
        });
        self.history.last().ok_or(Rejected::Exhausted)
    }

    /// Reverts the most recent decision.
    pub fn undo(&mut self) -> Result<HistoryEntry, Rejected> {
        self.history.pop().ok_or(Rejected::NothingToUndo)
    }
}
