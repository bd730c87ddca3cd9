//! UI rendering module
//!
//! The dock is drawn bottom-up like the web widget it mirrors: a launcher bar
//! along the bottom edge, chat windows docked above it from the right, and
//! the contact panel as an overlay in the bottom-right corner.

mod chat_windows;
mod contact_panel;
mod launcher;
mod helpers;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use crate::tui::app::App;

// Re-export render functions
pub use chat_windows::render_chat_windows;
pub use contact_panel::render_contact_panel;
pub use launcher::render_launcher;

// Re-export helper functions
pub use helpers::{online_marker, window_strip_area, CONTACT_PANEL_WIDTH};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),     // Chat windows
            Constraint::Length(3),  // Launcher bar
        ])
        .split(size);

    let panel_open = app.manager.is_contact_panel_open();
    render_chat_windows(f, app, window_strip_area(chunks[0], panel_open));
    render_launcher(f, app, chunks[1]);

    if panel_open {
        render_contact_panel(f, app, chunks[0]);
    }
}
