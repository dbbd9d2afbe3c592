//! Registry of local project directories.
//!
//! Entries are keyed by a random id and deduplicated by path. The registry is
//! persisted as a single JSON document by [`ProjectStore`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Projects shown per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A project directory remembered by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub path: String,
    /// User-chosen name; blank means "use the directory name".
    #[serde(default)]
    pub alias: String,
    pub last_access_time: DateTime<Utc>,
}

impl ProjectEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            path: path.into(),
            alias: alias.into(),
            last_access_time: Utc::now(),
        }
    }

    /// The alias, or the last path component when the alias is blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        if !self.alias.trim().is_empty() {
            return self.alias.clone();
        }
        Path::new(&self.path)
            .file_name()
            .map_or_else(|| self.path.clone(), |name| name.to_string_lossy().into_owned())
    }

    /// Whether the path still points at a directory.
    #[must_use]
    pub fn exists(&self) -> bool {
        Path::new(&self.path).is_dir()
    }
}

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive display name.
    #[default]
    Name,
    LastAccess,
}

/// Filter, order and page selection for [`ProjectRegistry::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Case-insensitive substring of the display name or path.
    pub search: Option<String>,
    pub sort: SortKey,
    pub descending: bool,
    /// 1-based; clamped into the available range.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort: SortKey::Name,
            descending: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub items: Vec<ProjectEntry>,
}

/// In-memory list of projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRegistry {
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

impl ProjectRegistry {
    /// Register `path`, which must be an existing directory.
    ///
    /// Adding a path that is already registered returns the existing entry
    /// unchanged.
    pub fn add(&mut self, path: &str, alias: &str) -> Result<ProjectEntry, CoreError> {
        if !Path::new(path).is_dir() {
            tracing::warn!(path, "refusing to register a path that is not a directory");
            return Err(CoreError::InvalidPath {
                path: path.to_string(),
            });
        }

        if let Some(existing) = self.projects.iter().find(|p| p.path == path) {
            tracing::info!(path, id = %existing.id, "project already registered");
            return Ok(existing.clone());
        }

        let entry = ProjectEntry::new(path, alias);
        tracing::info!(path, alias, id = %entry.id, "project registered");
        self.projects.push(entry.clone());
        Ok(entry)
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        before != self.projects.len()
    }

    /// Returns whether the entry exists.
    pub fn rename(&mut self, id: &str, alias: &str) -> bool {
        let Some(entry) = self.find_mut(id) else {
            return false;
        };
        entry.alias = alias.to_string();
        true
    }

    /// Stamp the entry with the current time. Returns whether it exists.
    pub fn touch(&mut self, id: &str) -> bool {
        let Some(entry) = self.find_mut(id) else {
            return false;
        };
        entry.last_access_time = Utc::now();
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn all(&self) -> &[ProjectEntry] {
        &self.projects
    }

    #[must_use]
    pub fn query(&self, query: &ProjectQuery) -> ProjectPage {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches = self
            .projects
            .iter()
            .filter(|p| {
                needle.as_ref().is_none_or(|needle| {
                    p.display_name().to_lowercase().contains(needle)
                        || p.path.to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect::<Vec<_>>();

        match query.sort {
            SortKey::Name => matches.sort_by_cached_key(|p| p.display_name().to_lowercase()),
            SortKey::LastAccess => matches.sort_by_key(|p| p.last_access_time),
        }
        if query.descending {
            matches.reverse();
        }

        let page_size = query.page_size.max(1);
        let total = matches.len();
        let total_pages = total.div_ceil(page_size).max(1);
        let page = query.page.clamp(1, total_pages);

        let items = matches
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        ProjectPage {
            page,
            total_pages,
            total,
            items,
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut ProjectEntry> {
        self.projects.iter_mut().find(|p| p.id == id)
    }
}

/// JSON file holding a [`ProjectRegistry`].
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/specimen/projects.json`, if the platform has a config dir.
    #[must_use]
    pub fn default_path(config_dir: Option<PathBuf>) -> Option<PathBuf> {
        config_dir.map(|dir| dir.join("specimen").join("projects.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registry. A missing file is an empty registry.
    pub fn load(&self) -> Result<ProjectRegistry, CoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProjectRegistry::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, registry: &ProjectRegistry) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let text = serde_json::to_string_pretty(registry)?;
        fs::write(&self.path, text).map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), count = registry.all().len(), "project list saved");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
