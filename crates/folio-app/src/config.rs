//! App configuration, loaded from an optional TOML file.

use std::path::Path;

use folio_types::Result;
use serde::Deserialize;

/// REPL configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Blank lines between sections in multi-argument `open`.
    pub section_gap: usize,
    /// Maximum history entries retained.
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            section_gap: 3,
            history_capacity: 100,
        }
    }
}

impl AppConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load `path` if it exists; fall back to defaults (with a warning on a
    /// broken file).
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            },
        }
    }
}
