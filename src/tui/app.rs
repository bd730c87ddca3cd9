//! Main TUI application state and key handling

use crate::chat::{ChatManager, Roster, Settings};
use crate::tui::panels::{ComposeBox, ContactPanelState};
use crate::tui::types::Focus;
use crossterm::event::KeyCode;
use std::collections::HashMap;

/// Application state
pub struct App {
    /// Chat window manager (all chat state lives here)
    pub manager: ChatManager,
    /// Which part of the dock has keyboard focus
    pub focus: Focus,
    /// Contact panel view state
    pub contact_panel: ContactPanelState,
    /// Index into the open windows of the focused window
    pub focused_window: usize,
    /// Draft input per contact id
    pub drafts: HashMap<String, ComposeBox>,
    /// Status message
    pub status_message: Option<String>,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application around `manager`
    pub fn new(manager: ChatManager) -> Self {
        Self {
            manager,
            focus: Focus::Launcher,
            contact_panel: ContactPanelState::new(),
            focused_window: 0,
            drafts: HashMap::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Create an application from optional roster and settings files
    ///
    /// Without a roster path the built-in demo roster is used. A missing
    /// settings file yields the defaults.
    pub fn from_files<P: AsRef<std::path::Path>>(
        roster_path: Option<P>,
        settings_path: Option<P>,
    ) -> crate::Result<Self> {
        let roster = match roster_path {
            Some(path) => Roster::load(path)?,
            None => {
                tracing::info!("No roster given, using the demo roster");
                Roster::demo()
            }
        };

        let settings = match settings_path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Ok(Self::new(ChatManager::with_settings(roster, settings)?))
    }

    /// Dispatch a key press to the focused part of the dock
    pub fn handle_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Launcher => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('c') => self.toggle_contact_panel(),
                KeyCode::Tab => self.focus_next_window(),
                KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                    let n = c.to_digit(10).unwrap_or(1) as usize;
                    self.restore_bubble(n - 1);
                }
                _ => {}
            },
            Focus::ContactPanel => match code {
                KeyCode::Esc => self.close_contact_panel(),
                KeyCode::Down => {
                    let count = self.manager.filtered_contacts().len();
                    self.contact_panel.next(count);
                }
                KeyCode::Up => {
                    let count = self.manager.filtered_contacts().len();
                    self.contact_panel.previous(count);
                }
                KeyCode::Enter => self.open_selected_contact(),
                KeyCode::Tab => self.focus_next_window(),
                KeyCode::Backspace => self.filter_backspace(),
                KeyCode::Char(c) => self.filter_push(c),
                _ => {}
            },
            Focus::Window => match code {
                KeyCode::Esc => self.focus = Focus::Launcher,
                KeyCode::Tab => self.focus_next_window(),
                KeyCode::F(2) => self.toggle_minimize_focused(),
                KeyCode::F(4) => self.close_focused(),
                KeyCode::Enter => {
                    if self.focused_is_minimized() {
                        self.toggle_minimize_focused();
                    } else {
                        self.send_focused();
                    }
                }
                KeyCode::Backspace => {
                    if let Some(draft) = self.focused_draft_mut() {
                        draft.backspace();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(draft) = self.focused_draft_mut() {
                        draft.add_char(c);
                    }
                }
                _ => {}
            },
        }
    }

    /// Show or hide the contact panel and move focus accordingly
    pub fn toggle_contact_panel(&mut self) {
        self.manager.toggle_contact_panel();
        if self.manager.is_contact_panel_open() {
            self.contact_panel = ContactPanelState::new();
            self.focus = Focus::ContactPanel;
        } else {
            self.focus = Focus::Launcher;
        }
    }

    /// Hide the contact panel
    pub fn close_contact_panel(&mut self) {
        self.manager.close_contact_panel();
        self.focus = Focus::Launcher;
    }

    /// Append a character to the contact filter
    pub fn filter_push(&mut self, c: char) {
        let mut text = self.manager.filter_text().to_string();
        text.push(c);
        self.set_filter(text);
    }

    /// Remove the last character of the contact filter
    pub fn filter_backspace(&mut self) {
        let mut text = self.manager.filter_text().to_string();
        text.pop();
        self.set_filter(text);
    }

    fn set_filter(&mut self, text: String) {
        self.manager.set_filter_text(text);
        let count = self.manager.filtered_contacts().len();
        self.contact_panel.clamp(count);
    }

    /// Open a chat with the contact selected in the panel
    pub fn open_selected_contact(&mut self) {
        let selected = self
            .manager
            .filtered_contacts()
            .get(self.contact_panel.selected_index)
            .map(|c| c.id.clone());

        match selected {
            Some(id) => self.open_chat(&id),
            None => self.status_message = Some("No contacts found.".to_string()),
        }
    }

    /// Open or refocus the chat with `contact_id` and focus its window
    pub fn open_chat(&mut self, contact_id: &str) {
        if self.manager.open_chat_by_id(contact_id) {
            self.focused_window = 0;
            self.focus = Focus::Window;
            self.prune_drafts();
            self.status_message = None;
        }
    }

    /// Reopen the `index`-th minimized bubble
    pub fn restore_bubble(&mut self, index: usize) {
        if self.manager.is_contact_panel_open() {
            return;
        }

        let contact_id = self
            .manager
            .minimized_bubbles()
            .get(index)
            .map(|w| w.contact_id.clone());

        if let Some(id) = contact_id {
            self.open_chat(&id);
        }
    }

    /// Cycle keyboard focus through the open windows
    pub fn focus_next_window(&mut self) {
        let count = self.manager.open_windows().len();
        if count == 0 {
            self.focus = Focus::Launcher;
            return;
        }

        if self.focus == Focus::Window {
            self.focused_window = (self.focused_window + 1) % count;
        } else {
            self.focused_window = 0;
            self.focus = Focus::Window;
        }
    }

    /// Contact id of the focused window
    pub fn focused_contact_id(&self) -> Option<String> {
        if self.focus != Focus::Window {
            return None;
        }
        self.manager
            .open_windows()
            .get(self.focused_window)
            .map(|w| w.contact_id.clone())
    }

    fn focused_is_minimized(&self) -> bool {
        self.manager
            .open_windows()
            .get(self.focused_window)
            .is_some_and(|w| w.minimized)
    }

    fn focused_draft_mut(&mut self) -> Option<&mut ComposeBox> {
        if self.focused_is_minimized() {
            return None;
        }
        let id = self.focused_contact_id()?;
        Some(self.drafts.entry(id).or_default())
    }

    /// Draft text of the window for `contact_id`
    pub fn draft(&self, contact_id: &str) -> &str {
        self.drafts
            .get(contact_id)
            .map(|d| d.input.as_str())
            .unwrap_or("")
    }

    /// Send the focused window's draft
    ///
    /// The draft is only cleared when the message was accepted.
    pub fn send_focused(&mut self) {
        let Some(id) = self.focused_contact_id() else {
            return;
        };

        let text = self.draft(&id).to_string();
        if self.manager.send_message(&id, &text) {
            if let Some(draft) = self.drafts.get_mut(&id) {
                draft.clear_input();
            }
        }
    }

    /// Minimize or restore the focused window
    pub fn toggle_minimize_focused(&mut self) {
        if let Some(id) = self.focused_contact_id() {
            self.manager.toggle_minimize(&id);
        }
    }

    /// Close the focused window and drop its draft
    pub fn close_focused(&mut self) {
        let Some(id) = self.focused_contact_id() else {
            return;
        };

        self.manager.close_chat(&id);
        self.drafts.remove(&id);

        let count = self.manager.open_windows().len();
        if count == 0 {
            self.focused_window = 0;
            self.focus = Focus::Launcher;
        } else if self.focused_window >= count {
            self.focused_window = count - 1;
        }
    }

    /// Drop drafts of windows that are no longer open (e.g. evicted)
    fn prune_drafts(&mut self) {
        let open: Vec<String> = self
            .manager
            .open_contact_ids()
            .into_iter()
            .map(String::from)
            .collect();
        self.drafts.retain(|id, _| open.contains(id));
    }
}
