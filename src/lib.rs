//! Feedchat - floating chat windows for a social home feed
//!
//! This library provides the chat-window manager behind the home feed's chat
//! dock: a contact roster, a capped set of recency-ordered conversation
//! windows and a terminal front-end that drives them.
//!
//! Call [`init`] once to get stdout logging when embedding the manager.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod tui;


use std::path::Path;

/// Result type alias for Feedchat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Feedchat operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable settings
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid or unreadable contact roster
    #[error("Roster error: {0}")]
    Roster(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize the Feedchat library with logging to stdout
///
/// For embedders driving a [`chat::ChatManager`] from their own front-end;
/// the bundled terminal front-end logs through [`init_file_logging`]
/// instead. Calling this when a global subscriber is already installed is a
/// no-op.
pub fn init() {
    if tracing_subscriber::fmt().try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// Initialize logging into a file
///
/// Used by the terminal front-end, where writing to stdout would corrupt the
/// rendered screen.
///
/// # Errors
/// Returns an error if the log file cannot be opened
pub fn init_file_logging<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
