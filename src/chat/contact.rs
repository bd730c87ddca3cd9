//! Contacts shown in the chat panel

use serde::{Deserialize, Serialize};

/// Represents a person who can be chatted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image reference
    #[serde(default)]
    pub avatar_url: String,
    /// Whether this contact is currently online
    #[serde(default)]
    pub is_online: bool,
    /// Preview of the last message exchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    /// Label for when the last message was exchanged (e.g. "10:30 AM", "Yesterday")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_time: Option<String>,
    /// Number of unread messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<u32>,
}

impl Contact {
    /// Create a new offline contact with no message history
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
            is_online: false,
            last_message: None,
            last_message_time: None,
            unread_count: None,
        }
    }

    /// Set the online flag
    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Set the last message preview and its time label
    pub fn with_last_message(mut self, text: impl Into<String>, time: impl Into<String>) -> Self {
        self.last_message = Some(text.into());
        self.last_message_time = Some(time.into());
        self
    }

    /// Set the unread message count
    pub fn with_unread(mut self, count: u32) -> Self {
        self.unread_count = Some(count);
        self
    }

    /// Whether there are unread messages from this contact
    pub fn has_unread(&self) -> bool {
        self.unread_count.is_some_and(|count| count > 0)
    }

    /// Mark everything from this contact as read
    pub fn clear_unread(&mut self) {
        self.unread_count = None;
    }

    /// Avatar fallback: first character of the display name
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Whether the display name contains `needle`, ignoring case
    ///
    /// An empty needle matches every contact.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
