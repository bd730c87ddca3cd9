//! Chat dock settings

use crate::{chat::manager::MAX_OPEN_WINDOWS, Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Chat dock settings
///
/// Stored in JSON format and loaded from disk when present. Missing fields
/// fall back to their defaults.
///
/// # Example
/// ```rust,no_run
/// use feedchat::chat::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let settings = Settings::load("feedchat_settings.json").expect("Failed to load");
/// println!("Up to {} chat windows", settings.max_open_windows);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of open chat windows, at most `MAX_OPEN_WINDOWS`; also caps the minimized bubbles
    pub max_open_windows: usize,
    /// chrono format string for message timestamps
    pub time_format: String,
    /// Text of the first message in a new window; `{name}` is replaced by the contact name
    pub chat_started_template: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Check that the settings can drive a chat manager
    ///
    /// # Errors
    /// Returns `Error::Config` if the window cap is zero or above
    /// `MAX_OPEN_WINDOWS`, the time format is
    /// not a valid chrono format, or the greeting template is blank
    pub fn validate(&self) -> Result<()> {
        if self.max_open_windows == 0 {
            return Err(Error::Config("max_open_windows must be at least 1".to_string()));
        }

        if self.max_open_windows > MAX_OPEN_WINDOWS {
            return Err(Error::Config(format!(
                "max_open_windows cannot exceed {} (got {})",
                MAX_OPEN_WINDOWS, self.max_open_windows
            )));
        }

        if self.time_format.trim().is_empty()
            || StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error))
        {
            return Err(Error::Config(format!("Invalid time format: {:?}", self.time_format)));
        }

        if self.chat_started_template.trim().is_empty() {
            return Err(Error::Config("chat_started_template cannot be empty".to_string()));
        }

        Ok(())
    }

    /// First message text for a new window with `name`
    pub fn chat_started_text(&self, name: &str) -> String {
        self.chat_started_template.replace("{name}", name)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_open_windows: MAX_OPEN_WINDOWS,
            time_format: "%H:%M".to_string(),
            chat_started_template: "Started chat with {name}".to_string(),
        }
    }
}
