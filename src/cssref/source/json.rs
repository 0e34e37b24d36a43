use super::{CatalogData, CatalogSource};
use crate::error::{CssRefError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a catalog from a JSON document.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a catalog document to `path`, pretty-printed.
    pub fn save(path: &Path, data: &CatalogData) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CssRefError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(data).map_err(CssRefError::Serialization)?;
        fs::write(path, content).map_err(CssRefError::Io)?;
        Ok(())
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<CatalogData> {
        let content = fs::read_to_string(&self.path).map_err(CssRefError::Io)?;
        let data: CatalogData =
            serde_json::from_str(&content).map_err(CssRefError::Serialization)?;
        tracing::debug!(
            path = %self.path.display(),
            categories = data.categories.len(),
            properties = data.properties.len(),
            "read catalog file"
        );
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
