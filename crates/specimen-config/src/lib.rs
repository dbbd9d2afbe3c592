//! # specimen-config
//!
//! Layered configuration loading for Specimen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPECIMEN_*` prefix, `__` as separator)
//! 2. Project-level `.specimen/config.toml`
//! 3. User-level `~/.config/specimen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPECIMEN_INSPECT__MAX_DEPTH` -> `inspect.max_depth` and
//! `SPECIMEN_PROJECTS__STORE_PATH` -> `projects.store_path`.
//!
//! # Usage
//!
//! ```no_run
//! use specimen_config::SpecimenConfig;
//!
//! let config = SpecimenConfig::load_with_dotenv().expect("config");
//! println!("max depth: {}", config.inspect.max_depth);
//! ```

mod error;
mod inspect;
mod projects;

pub use error::ConfigError;
pub use inspect::InspectConfig;
pub use projects::ProjectsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpecimenConfig {
    #[serde(default)]
    pub inspect: InspectConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

impl SpecimenConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory, if any.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".specimen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SPECIMEN_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inspect.validate()?;
        self.projects.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("specimen").join("config.toml"))
    }
}
