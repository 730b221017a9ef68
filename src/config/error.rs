use std::path::PathBuf;
use thiserror::Error;

use crate::core::ValidationError;

/// Errors that can occur while loading a keymap configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Configuration file is not valid keymap JSON.
    #[error("Invalid keymap JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A binding was refused by strict validation.
    #[error("Invalid binding '{combo}': {source}")]
    InvalidBinding {
        combo: String,
        #[source]
        source: ValidationError,
    },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
