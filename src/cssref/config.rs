use crate::error::{CssRefError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

/// Keys accepted by [`CssRefConfig::get`] and [`CssRefConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["catalog-path", "line-width", "show-icons"];

/// Configuration for cssref, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CssRefConfig {
    /// JSON catalog to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Width that list output is truncated to
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Prefix rows with the category icon
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_show_icons() -> bool {
    true
}

impl Default for CssRefConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            line_width: DEFAULT_LINE_WIDTH,
            show_icons: true,
        }
    }
}

impl CssRefConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CssRefError::Io)?;
        let config: CssRefConfig =
            serde_json::from_str(&content).map_err(CssRefError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CssRefError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CssRefError::Serialization)?;
        fs::write(&config_path, content).map_err(CssRefError::Io)?;
        tracing::debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog-path" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            "line-width" => Some(self.line_width.to_string()),
            "show-icons" => Some(self.show_icons.to_string()),
            _ => None,
        }
    }

    /// Set a key from its textual form. An empty `catalog-path` restores the built-in catalog.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog-path" => {
                self.catalog_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    CssRefError::Config(format!("line-width must be a number, got {}", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(CssRefError::Config(format!(
                        "line-width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            "show-icons" => {
                self.show_icons = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    other => {
                        return Err(CssRefError::Config(format!(
                            "show-icons must be true or false, got {}",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(CssRefError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}
