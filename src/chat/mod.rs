//! Chat dock state
//!
//! This module holds everything the floating chat widget needs:
//! - `contact` - People available to chat with
//! - `message` - Chat lines and their sender role
//! - `window` - A single open conversation window
//! - `roster` - The ordered contact list and name filtering
//! - `settings` - Tunables for the window manager
//! - `manager` - The chat window manager that owns the open windows

// Submodules
pub mod contact;
pub mod manager;
pub mod message;
pub mod roster;
pub mod settings;
pub mod window;

// Re-export commonly used types
pub use contact::Contact;
pub use manager::{ChatManager, MAX_OPEN_WINDOWS};
pub use message::{format_timestamp, Message, Sender};
pub use roster::Roster;
pub use settings::Settings;
pub use window::{ChatWindow, WindowState};
