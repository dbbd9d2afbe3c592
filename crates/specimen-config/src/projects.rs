//! Settings for the project registry.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specimen_core::ProjectStore;
use specimen_core::projects::DEFAULT_PAGE_SIZE;

use crate::ConfigError;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectsConfig {
    /// Registry file. Empty means `<config dir>/specimen/projects.json`.
    #[serde(default)]
    pub store_path: String,

    /// Projects per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            store_path: String::new(),
            page_size: default_page_size(),
        }
    }
}

impl ProjectsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "projects.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved registry file location.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.store_path.trim().is_empty() {
            return Ok(PathBuf::from(&self.store_path));
        }
        ProjectStore::default_path(dirs::config_dir()).ok_or_else(|| ConfigError::InvalidValue {
            field: "projects.store_path".to_string(),
            reason: "no platform config directory; set it explicitly".to_string(),
        })
    }
}
