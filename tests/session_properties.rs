//! Behavioral laws of the rating session.

mod common;

use catswipe::deck::{Decision, Deck, HistoryEntry, Rejected};
use catswipe::provider::ProviderError;
use catswipe::ui::session::{Phase, Session, SessionState};
use common::{cats, loaded_session};
use std::collections::BTreeSet;

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Every like/dislike pattern for a deck of `len` cards.
fn patterns(len: usize) -> Vec<Vec<Decision>> {
    (0..1u32 << len)
        .map(|bits| {
            (0..len)
                .map(|i| {
                    if bits & (1 << i) != 0 {
                        Decision::Like
                    } else {
                        Decision::Dislike
                    }
                })
                .collect()
        })
        .collect()
}

fn deck(session: &Session) -> &Deck {
    session.deck().expect("session is loaded")
}

fn snapshot(session: &Session) -> (usize, BTreeSet<String>, Vec<HistoryEntry>) {
    let deck = deck(session);
    (
        deck.cursor(),
        deck.liked().into_iter().map(str::to_string).collect(),
        deck.history().to_vec(),
    )
}

#[test]
fn cursor_tracks_swipe_count() {
    for pattern in patterns(IDS.len()) {
        let mut session = loaded_session(&IDS);
        for (made, decision) in pattern.iter().enumerate() {
            session.swipe(*decision).expect("deck not exhausted");
            let deck = deck(&session);
            assert_eq!(deck.cursor(), made + 1);
            assert_eq!(deck.history().len(), deck.cursor());
        }
    }
}

#[test]
fn liked_plus_disliked_equals_cursor() {
    for pattern in patterns(IDS.len()) {
        let mut session = loaded_session(&IDS);
        for decision in &pattern {
            session.swipe(*decision).expect("swipe");
            let deck = deck(&session);
            assert_eq!(deck.liked_count() + deck.disliked_count(), deck.cursor());
        }
        while session.undo().is_ok() {
            let deck = deck(&session);
            assert_eq!(deck.liked_count() + deck.disliked_count(), deck.cursor());
        }
        assert_eq!(deck(&session).cursor(), 0);
    }
}

#[test]
fn liked_is_subset_of_rated_prefix() {
    for pattern in patterns(4) {
        let mut session = loaded_session(&IDS[..4]);
        for decision in &pattern {
            session.swipe(*decision).expect("swipe");
        }
        let deck = deck(&session);
        let rated: BTreeSet<&str> = deck.candidates()[..deck.cursor()]
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert!(deck.liked().is_subset(&rated));
    }
}

#[test]
fn undo_then_same_swipe_restores_state() {
    for pattern in patterns(4) {
        let mut session = loaded_session(&IDS[..4]);
        for decision in &pattern {
            session.swipe(*decision).expect("swipe");
            let before = snapshot(&session);
            let undone = session.undo().expect("undo");
            session.swipe(undone.decision).expect("redo");
            assert_eq!(snapshot(&session), before);
        }
    }
}

#[test]
fn reset_always_clears_progress() {
    for rated in 0..=IDS.len() {
        let mut session = loaded_session(&IDS);
        for _ in 0..rated {
            session.swipe(Decision::Like).expect("swipe");
        }
        let ticket = session.reset().expect("reset accepted");
        assert_eq!(session.phase(), Phase::Loading);

        session
            .apply_fetch(ticket.generation, Ok(cats(&["x", "y"])))
            .expect("apply");
        let deck = deck(&session);
        assert_eq!(deck.cursor(), 0);
        assert!(deck.liked().is_empty());
        assert!(deck.history().is_empty());
    }
}

#[test]
fn reset_from_error_starts_new_fetch() {
    let mut session = Session::new();
    let ticket = session.begin_fetch().expect("fetch");
    session
        .apply_fetch(ticket.generation, Err(ProviderError::Status { status: 500 }))
        .expect("apply");
    assert_eq!(session.phase(), Phase::Error);

    let retry = session.reset().expect("retry");
    assert_eq!(retry.generation, ticket.generation + 1);
    assert_eq!(session.phase(), Phase::Loading);
}

#[test]
fn like_dislike_undo_like_scenario() {
    let mut session = loaded_session(&["A", "B", "C"]);
    session.swipe(Decision::Like).expect("swipe A");
    session.swipe(Decision::Dislike).expect("swipe B");
    session.undo().expect("undo B");
    session.swipe(Decision::Like).expect("swipe B again");

    let deck = deck(&session);
    let liked: Vec<&str> = deck.liked().into_iter().collect();
    assert_eq!(liked, vec!["A", "B"]);
    assert_eq!(deck.cursor(), 2);
    let history: Vec<(&str, Decision)> = deck
        .history()
        .iter()
        .map(|e| (e.candidate.id.as_str(), e.decision))
        .collect();
    assert_eq!(history, vec![("A", Decision::Like), ("B", Decision::Like)]);
}

#[test]
fn empty_batch_never_completes() {
    let mut session = Session::new();
    let ticket = session.begin_fetch().expect("fetch");
    session.apply_fetch(ticket.generation, Ok(Vec::new())).expect("apply");
    assert_eq!(session.phase(), Phase::Error);
    assert!(session.deck().is_none());
    assert_eq!(session.swipe(Decision::Like), Err(Rejected::NotLoaded));
}

#[test]
fn undo_with_empty_history_leaves_state_unchanged() {
    let mut session = loaded_session(&["a", "b"]);
    let before = session.state().clone();
    assert_eq!(session.undo(), Err(Rejected::NothingToUndo));
    assert_eq!(session.state(), &before);
}

#[test]
fn undo_before_load_is_rejected() {
    let mut session = Session::new();
    assert_eq!(session.undo(), Err(Rejected::NotLoaded));
    assert_eq!(session.state(), &SessionState::Idle);
}

#[test]
fn reset_while_loading_is_rejected() {
    let mut session = loaded_session(&["a"]);
    let ticket = session.reset().expect("reset");
    assert_eq!(session.reset(), Err(Rejected::FetchInFlight));
    assert_eq!(session.generation(), ticket.generation);
}

#[test]
fn stale_generation_result_is_discarded() {
    let mut session = Session::new();
    let first = session.begin_fetch().expect("fetch");
    session
        .apply_fetch(first.generation, Err(ProviderError::Timeout { duration: 10 }))
        .expect("apply");
    let second = session.reset().expect("retry");

    // A late duplicate of the first fetch must not land.
    let stale = session.apply_fetch(first.generation, Ok(cats(&["old"])));
    assert_eq!(
        stale,
        Err(Rejected::StaleGeneration {
            got: first.generation,
            current: second.generation
        })
    );
    assert_eq!(session.phase(), Phase::Loading);

    session
        .apply_fetch(second.generation, Ok(cats(&["new"])))
        .expect("apply");
    let ids: Vec<&str> = deck(&session)
        .candidates()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["new"]);
}

#[test]
fn result_after_load_is_discarded() {
    let mut session = loaded_session(&["a"]);
    let generation = session.generation();
    let before = session.state().clone();
    assert!(session.apply_fetch(generation, Ok(cats(&["b"]))).is_err());
    assert_eq!(session.state(), &before);
}

#[test]
fn each_load_gets_new_session_id() {
    let mut session = loaded_session(&["a"]);
    let first = session.state().session_id().expect("id");
    let ticket = session.reset().expect("reset");
    session
        .apply_fetch(ticket.generation, Ok(cats(&["a"])))
        .expect("apply");
    let second = session.state().session_id().expect("id");
    assert_ne!(first, second);
}
