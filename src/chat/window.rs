//! A single open conversation window

use crate::chat::message::Message;
use serde::{Deserialize, Serialize};

/// Visual state of an open window
///
/// There is no closed state: closing a window removes it from the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Full window with message history and input
    Expanded,
    /// Header bar only
    Minimized,
}

/// An open chat session bound to exactly one contact
///
/// The contact is referenced by identifier and looked up in the roster when
/// rendering, so changes such as the online flag are always current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWindow {
    /// Identifier of the contact this window talks to
    pub contact_id: String,
    /// Messages in append order
    pub messages: Vec<Message>,
    /// Whether the window is collapsed to its header
    pub minimized: bool,
}

impl ChatWindow {
    /// Create an expanded window seeded with its first message
    pub fn new(contact_id: String, first: Message) -> Self {
        Self {
            contact_id,
            messages: vec![first],
            minimized: false,
        }
    }

    /// Current visual state
    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else {
            WindowState::Expanded
        }
    }

    /// Flip between expanded and minimized
    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Expand the window
    pub fn restore(&mut self) {
        self.minimized = false;
    }

    /// Append a message to this conversation
    pub fn append_message(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    /// Most recent message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
