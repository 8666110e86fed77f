//! Swipe through a batch of cats in the terminal.

pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod provider;
pub mod ui;
