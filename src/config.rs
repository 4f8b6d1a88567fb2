//! Output configuration.
//!
//! Loaded from an optional TOML file; every key has a default so an empty
//! file (or no file) yields the plain `default.css` document.
//!
//! ```toml
//! stylesheet = "default.css"
//! escape_html = false
//! fragment = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Stylesheet linked from the preamble when nothing else is configured.
pub const DEFAULT_STYLESHEET: &str = "default.css";

/// Settings that shape the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// href of the stylesheet link line
    pub stylesheet: String,
    /// Escape `< > & " '` in passed-through text
    pub escape_html: bool,
    /// Emit only the transcoded body, without link line and wrapper
    pub fragment: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            escape_html: false,
            fragment: false,
        }
    }
}

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load a config file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
