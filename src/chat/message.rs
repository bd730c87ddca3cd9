//! Chat lines and their sender role

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user
    Me,
    /// The contact on the other side (also used for system notices)
    Them,
}

impl Sender {
    /// Label used when rendering a message line
    pub fn label(&self) -> &str {
        match self {
            Self::Me => "You",
            Self::Them => "Them",
        }
    }
}

/// One line in a conversation
///
/// Messages are immutable once created; a conversation only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identifier, strictly increasing within a manager
    pub id: u64,
    /// Body text
    pub text: String,
    /// Author
    pub sender: Sender,
    /// Display timestamp, formatted at creation time
    pub timestamp: String,
}

impl Message {
    /// Create a new message
    pub fn new(id: u64, text: impl Into<String>, sender: Sender, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: timestamp.into(),
        }
    }

    /// Whether the local user wrote this message
    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// Format a local time for display on a message
///
/// `format` is a chrono format string such as `"%H:%M"`.
pub fn format_timestamp(at: DateTime<Local>, format: &str) -> String {
    at.format(format).to_string()
}
