//! Chat window manager
//!
//! Owns the recency-ordered set of open conversation windows and mediates
//! every transition on them. The front of the list is the most recently
//! opened or refocused window; when a new contact is opened at capacity the
//! window at the back is evicted, whether minimized or not.
//!
//! Every operation is total: unknown identifiers and blank messages are
//! absorbed without an error.

use crate::{
    chat::{
        contact::Contact,
        message::{format_timestamp, Message, Sender},
        roster::Roster,
        settings::Settings,
        window::ChatWindow,
    },
    Result,
};
use chrono::Local;
use std::collections::VecDeque;

/// Upper bound on concurrently open chat windows
pub const MAX_OPEN_WINDOWS: usize = 3;

/// State behind the floating chat dock
#[derive(Debug, Clone)]
pub struct ChatManager {
    /// Contacts available to chat with
    roster: Roster,
    /// Open windows, most recent first
    windows: VecDeque<ChatWindow>,
    /// Whether the contact list overlay is shown
    contact_panel_open: bool,
    /// Current contact filter text
    filter_text: String,
    /// Last message id handed out
    last_message_id: u64,
    /// Window cap, timestamp format and greeting text
    settings: Settings,
}

impl ChatManager {
    /// Create a manager over `roster` with default settings
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            windows: VecDeque::with_capacity(MAX_OPEN_WINDOWS),
            contact_panel_open: false,
            filter_text: String::new(),
            last_message_id: 0,
            settings: Settings::default(),
        }
    }

    /// Create a manager with custom settings
    ///
    /// # Errors
    /// Returns an error if the settings fail validation
    pub fn with_settings(roster: Roster, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let mut manager = Self::new(roster);
        manager.settings = settings;
        Ok(manager)
    }

    /// Open a chat with `contact`, or bring its existing window to the front
    ///
    /// An existing window is restored if minimized and keeps its history. A
    /// new window is seeded with a single "chat started" notice; if the cap
    /// is reached, the least recently used window is evicted first. Opening a
    /// chat always dismisses the contact panel and clears the contact's
    /// unread count.
    pub fn open_chat(&mut self, contact: &Contact) {
        if let Some(pos) = self.position(&contact.id) {
            if let Some(mut window) = self.windows.remove(pos) {
                window.restore();
                self.windows.push_front(window);
                tracing::debug!("Refocused chat with {}", contact.id);
            }
        } else {
            while self.windows.len() >= self.settings.max_open_windows {
                let Some(evicted) = self.windows.pop_back() else {
                    break;
                };
                tracing::debug!("Evicted chat with {} to make room", evicted.contact_id);
            }

            let text = self.settings.chat_started_text(&contact.name);
            let notice = Self::new_message(&mut self.last_message_id, &self.settings, text, Sender::Them);
            self.windows.push_front(ChatWindow::new(contact.id.clone(), notice));
            tracing::debug!("Opened chat with {}", contact.id);
        }

        if let Some(entry) = self.roster.get_mut(&contact.id) {
            entry.clear_unread();
        }
        self.contact_panel_open = false;
    }

    /// Open a chat with the roster contact `contact_id`
    ///
    /// # Returns
    /// False if no such contact is in the roster
    pub fn open_chat_by_id(&mut self, contact_id: &str) -> bool {
        match self.roster.get(contact_id).cloned() {
            Some(contact) => {
                self.open_chat(&contact);
                true
            }
            None => {
                tracing::debug!("Ignoring open for unknown contact {}", contact_id);
                false
            }
        }
    }

    /// Flip the minimized flag of the window for `contact_id`
    ///
    /// Does not change window order.
    pub fn toggle_minimize(&mut self, contact_id: &str) {
        if let Some(window) = self.window_mut(contact_id) {
            window.toggle_minimized();
        }
    }

    /// Close the window for `contact_id`, discarding its history
    pub fn close_chat(&mut self, contact_id: &str) {
        if let Some(pos) = self.position(contact_id) {
            self.windows.remove(pos);
            tracing::debug!("Closed chat with {}", contact_id);
        }
    }

    /// Append a message from the local user to the window for `contact_id`
    ///
    /// Text is trimmed; blank text and unknown windows are ignored. Window
    /// order and minimized state are left untouched.
    ///
    /// # Returns
    /// True if a message was appended
    pub fn send_message(&mut self, contact_id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank message to {}", contact_id);
            return false;
        }

        let Some(window) = self.windows.iter_mut().find(|w| w.contact_id == contact_id) else {
            tracing::debug!("Ignoring message to {}: no open window", contact_id);
            return false;
        };

        let msg = Self::new_message(&mut self.last_message_id, &self.settings, text.to_string(), Sender::Me);
        window.append_message(msg);
        true
    }

    /// Replace the contact filter text
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Current contact filter text
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Roster contacts matching the filter text, in roster order
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.roster.filter(&self.filter_text)
    }

    /// Show or hide the contact panel
    pub fn toggle_contact_panel(&mut self) {
        self.contact_panel_open = !self.contact_panel_open;
    }

    /// Hide the contact panel
    pub fn close_contact_panel(&mut self) {
        self.contact_panel_open = false;
    }

    /// Whether the contact panel is shown
    pub fn is_contact_panel_open(&self) -> bool {
        self.contact_panel_open
    }

    /// Open windows, most recent first
    pub fn open_windows(&self) -> &VecDeque<ChatWindow> {
        &self.windows
    }

    /// Contact identifiers of the open windows, most recent first
    pub fn open_contact_ids(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.contact_id.as_str()).collect()
    }

    /// The window for `contact_id`, if open
    pub fn window(&self, contact_id: &str) -> Option<&ChatWindow> {
        self.windows.iter().find(|w| w.contact_id == contact_id)
    }

    /// Minimized windows to show as bubbles, most recent first
    pub fn minimized_bubbles(&self) -> Vec<&ChatWindow> {
        self.windows
            .iter()
            .filter(|w| w.minimized)
            .take(self.settings.max_open_windows)
            .collect()
    }

    /// Roster entry for the contact bound to `window`
    pub fn contact_for(&self, window: &ChatWindow) -> Option<&Contact> {
        self.roster.get(&window.contact_id)
    }

    /// Number of roster contacts currently online
    pub fn online_count(&self) -> usize {
        self.roster.online_count()
    }

    /// The contact roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The contact roster, for updates such as presence changes
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn position(&self, contact_id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.contact_id == contact_id)
    }

    fn window_mut(&mut self, contact_id: &str) -> Option<&mut ChatWindow> {
        self.windows.iter_mut().find(|w| w.contact_id == contact_id)
    }

    /// Build a message stamped with the current local time
    ///
    /// Ids come from the clock in milliseconds but never repeat or go
    /// backwards, even for messages created within the same millisecond.
    /// Borrows only the id counter and settings, leaving `windows` free.
    fn new_message(last_id: &mut u64, settings: &Settings, text: String, sender: Sender) -> Message {
        let now = Local::now();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(*last_id + 1);
        *last_id = id;

        Message::new(id, text, sender, format_timestamp(now, &settings.time_format))
    }
}

impl Default for ChatManager {
    fn default() -> Self {
        Self::new(Roster::demo())
    }
}
