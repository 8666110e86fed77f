//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use catswipe::config::Config;
use catswipe::deck::Candidate;
use catswipe::ui::app::App;
use catswipe::ui::session::Session;
use std::path::PathBuf;
use tempfile::TempDir;

/// Candidates with the given ids and no tags.
pub fn cats(ids: &[&str]) -> Vec<Candidate> {
    ids.iter().map(|id| Candidate::new(*id, Vec::new())).collect()
}

/// A session whose first fetch returned `ids`.
pub fn loaded_session(ids: &[&str]) -> Session {
    let mut session = Session::new();
    let ticket = session.begin_fetch().expect("first fetch is accepted");
    session
        .apply_fetch(ticket.generation, Ok(cats(ids)))
        .expect("current generation is applied");
    session
}

/// An app with default config whose first fetch returned `ids`.
pub fn loaded_app(ids: &[&str]) -> App {
    let mut app = App::new(&Config::default());
    let ticket = app.start().expect("first fetch is accepted");
    app.on_fetch_complete(ticket.generation, Ok(cats(ids)));
    app
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
