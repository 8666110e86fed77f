//! Terminal front end: renders the session and turns input into intents.

pub mod app;
pub mod events;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod terminal_guard;
pub mod theme;
