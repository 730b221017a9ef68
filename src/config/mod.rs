//! Keymap configuration files
//!
//! A keymap is declared as JSON:
//!
//! ```json
//! {
//!   "delimiter": "+",
//!   "strict": false,
//!   "bindings": [
//!     { "combo": "ctrl+s", "action": "save" },
//!     { "combo": "esc", "action": "close" }
//!   ]
//! }
//! ```
//!
//! Every field is optional: the delimiter defaults to `+`, strict
//! validation is off, and a missing binding list is empty.
//!
//! # Example
//!
//! ```no_run
//! use key_combo_matcher::config::load_config;
//! use key_combo_matcher::InputEvent;
//! use std::path::Path;
//!
//! let keymap = load_config(Path::new("/home/user/.config/keymap.json"))?;
//! for binding in keymap.dispatch(&InputEvent::new("s").with_ctrl()) {
//!     println!("{}", binding.action);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::parser::DEFAULT_DELIMITER;
use crate::core::{ComboMatcher, Keymap};

/// One declared binding
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BindingEntry {
    /// Combo string, split on the keymap's delimiter
    pub combo: String,
    /// Action reported when the combo fires
    pub action: String,
}

/// Parsed keymap configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeymapConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            strict: false,
            bindings: Vec::new(),
        }
    }
}

impl KeymapConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), bindings = config.bindings.len(), "keymap config loaded");
        Ok(config)
    }

    /// Matcher configured with this file's delimiter and strictness.
    pub fn matcher(&self) -> ComboMatcher {
        ComboMatcher::new()
            .with_delimiter(self.delimiter)
            .strict(self.strict)
    }

    /// Builds a keymap holding every declared binding, in file order.
    ///
    /// In strict mode the first binding that fails validation aborts the
    /// build.
    pub fn build_keymap(&self) -> Result<Keymap, ConfigError> {
        let mut keymap = Keymap::new(self.matcher());
        for entry in &self.bindings {
            keymap
                .bind(&entry.combo, &entry.action)
                .map_err(|source| ConfigError::InvalidBinding {
                    combo: entry.combo.clone(),
                    source,
                })?;
        }
        Ok(keymap)
    }
}

/// Loads the file at `path` and builds its keymap.
pub fn load_config(path: &Path) -> Result<Keymap, ConfigError> {
    KeymapConfig::load(path)?.build_keymap()
}

#[cfg(test)]
mod tests;
