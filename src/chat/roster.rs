//! Contact roster and name filtering

use crate::{chat::contact::Contact, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ordered list of contacts available to chat with
///
/// The roster is supplied from outside the chat manager. Order is the order
/// the contacts were given in and is preserved by every view over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    contacts: Vec<Contact>,
}

impl Roster {
    /// Build a roster from a list of contacts
    ///
    /// # Errors
    /// Returns an error if two contacts share an identifier
    pub fn new(contacts: Vec<Contact>) -> Result<Self> {
        let roster = Self { contacts };
        roster.check_unique_ids()?;
        Ok(roster)
    }

    /// The built-in demo roster
    pub fn demo() -> Self {
        Self {
            contacts: vec![
                Contact::new("user1", "Alice Wonderland", "https://i.pravatar.cc/40?u=alice")
                    .online(true)
                    .with_last_message("Hey there! How are you?", "10:30 AM")
                    .with_unread(2),
                Contact::new("user2", "Bob The Builder", "https://i.pravatar.cc/40?u=bob")
                    .with_last_message("Can we fix it? Yes we can!", "Yesterday"),
                Contact::new("user3", "Charlie Brown", "https://i.pravatar.cc/40?u=charlie")
                    .online(true)
                    .with_last_message("Good grief. Peanuts anyone?", "9:15 AM"),
                Contact::new("user4", "Diana Prince", "https://i.pravatar.cc/40?u=diana")
                    .online(true)
                    .with_last_message("Saving the world, brb.", "Mon"),
                Contact::new("user5", "Edward Scissorhands", "https://i.pravatar.cc/40?u=edward")
                    .with_last_message("Just trimming the hedges.", "Sun"),
            ],
        }
    }

    /// Load a roster from a JSON file containing an array of contacts
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not a contact array,
    /// or contains duplicate identifiers
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Roster(format!("Failed to read roster {}: {}", path.display(), e)))?;

        let contacts: Vec<Contact> = serde_json::from_str(&data)
            .map_err(|e| Error::Roster(format!("Failed to parse roster: {}", e)))?;

        let roster = Self::new(contacts)?;
        tracing::info!("Loaded {} contacts from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Save the roster as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| Error::Roster(format!("Failed to write roster: {}", e)))?;
        Ok(())
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for contact in &self.contacts {
            if !seen.insert(contact.id.as_str()) {
                return Err(Error::Roster(format!("Duplicate contact id: {}", contact.id)));
            }
        }
        Ok(())
    }

    /// All contacts in roster order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the roster has no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by identifier
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Look up a contact by identifier for updating
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    /// Contacts whose display name contains `text`, ignoring case, in roster order
    pub fn filter(&self, text: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.matches(text)).collect()
    }

    /// Number of contacts currently online
    pub fn online_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.is_online).count()
    }
}
