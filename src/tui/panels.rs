//! View state for the contact panel and the compose boxes

/// Contact panel state
#[derive(Debug, Default)]
pub struct ContactPanelState {
    /// Selected index into the filtered contact list
    pub selected_index: usize,
}

impl ContactPanelState {
    /// Create new contact panel state
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Move to next contact
    pub fn next(&mut self, contact_count: usize) {
        if contact_count > 0 {
            self.selected_index = (self.selected_index + 1) % contact_count;
        }
    }

    /// Move to previous contact
    pub fn previous(&mut self, contact_count: usize) {
        if contact_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = contact_count - 1;
            }
        }
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, contact_count: usize) {
        if self.selected_index >= contact_count {
            self.selected_index = contact_count.saturating_sub(1);
        }
    }
}

/// Draft input of one chat window
#[derive(Debug, Default, Clone)]
pub struct ComposeBox {
    /// Input buffer for message composition
    pub input: String,
}

impl ComposeBox {
    /// Add character to input
    pub fn add_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove last character from input
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clear input buffer
    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}
