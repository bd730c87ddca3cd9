//! TUI (Terminal User Interface) module
//!
//! A terminal rendition of the floating chat dock. All state transitions go
//! through the [`ChatManager`](crate::chat::ChatManager); this module only
//! keeps view state such as focus, selection and draft input.

pub mod types;
pub mod panels;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::Focus;
pub use panels::*;
pub use app::App;
