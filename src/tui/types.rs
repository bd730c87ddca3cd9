//! Core types for the chat dock front-end

/// Which part of the dock receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "Chat (N)" launcher bar and minimized bubbles
    Launcher,
    /// The contact list overlay
    ContactPanel,
    /// One of the open chat windows
    Window,
}

impl Focus {
    /// Key hints shown in the launcher bar
    pub fn help_text(&self) -> &str {
        match self {
            Self::Launcher => "c: Contacts | Tab: Windows | 1-3: Restore bubble | q/Esc: Quit",
            Self::ContactPanel => "Type: Filter | ↑↓: Select | Enter: Open | Tab: Windows | Esc: Close",
            Self::Window => "Enter: Send | F2: Minimize | F4: Close | Tab: Next window | Esc: Back",
        }
    }
}
