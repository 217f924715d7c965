//! Configuration loaded from the platform config directory.
//!
//! Only the index section is configurable: its reserved title (documents not
//! written in Spanish may want something other than `Índice`) and the indent
//! unit for nested entries. A missing or unreadable config file silently
//! falls back to the defaults; the CLI `--title` flag overrides both.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::index::{DEFAULT_INDEX_INDENT, DEFAULT_INDEX_TITLE};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
}

/// Index generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Reserved title of the generated index section.
    #[serde(default = "default_index_title")]
    pub title: String,

    /// Indent unit for nested index entries, one per level of depth.
    #[serde(default = "default_index_indent")]
    pub indent: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: default_index_title(),
            indent: default_index_indent(),
        }
    }
}

fn default_index_title() -> String {
    DEFAULT_INDEX_TITLE.to_string()
}

fn default_index_indent() -> String {
    DEFAULT_INDEX_INDENT.to_string()
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/indice/config.toml
    /// - Linux: ~/.config/indice/config.toml
    /// - Windows: %APPDATA%/indice/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("indice").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                fs::read_to_string(&path)
                    .ok()
                    .and_then(|contents| toml::from_str(&contents).ok())
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.index.title, "Índice");
        assert_eq!(config.index.indent, "    ");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[index]\ntitle = \"Contents\"\n").unwrap();
        assert_eq!(config.index.title, "Contents");
        assert_eq!(config.index.indent, "    ");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.index.title, "Índice");
    }
}
