//! TOML configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::export::TableStyle;

/// Top-level configuration. Every field has a default, so an empty file is
/// valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Styling of the exported HTML table.
    #[serde(default)]
    pub table: TableStyle,

    /// System clipboard settings.
    #[serde(default)]
    pub clipboard: ClipboardSettings,

    /// Selection copy settings.
    #[serde(default)]
    pub selection: SelectionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardSettings {
    /// Copy utility and arguments, receives the text on stdin
    #[serde(default)]
    pub text_command: Option<Vec<String>>,
    /// Allow the OSC 52 terminal escape as a last resort
    #[serde(default = "default_true")]
    pub osc52: bool,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            text_command: None,
            osc52: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionSettings {
    /// Delay before reading a selection, in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_settle_ms() -> u64 {
    100
}

impl Config {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}
