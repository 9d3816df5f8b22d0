use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{hlog_debug, Error, Result};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000/api/fake-roc";
pub const DEFAULT_DATABASE_NAME: &str = "eln";

/// Optional overrides supplied when the home provider mounts.
///
/// Any field left `None` falls back to the built-in default in [`HomeConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HomeConfig {
    pub service_url: Option<String>,
    pub database_name: Option<String>,
}

/// Configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub service_url: String,
    pub database_name: String,
}

impl HomeConfig {
    pub fn dev_home_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".dev-home"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::dev_home_dir()?.join("config.toml"))
    }

    pub fn storage_path() -> Result<PathBuf> {
        Ok(Self::dev_home_dir()?.join("storage.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        hlog_debug!("HomeConfig::load path={}", path.display());
        if !path.exists() {
            hlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        hlog_debug!(
            "Config loaded: service_url={:?}, database_name={:?}",
            config.service_url,
            config.database_name
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        hlog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: HomeConfig) -> HomeConfig {
        HomeConfig {
            service_url: overrides.service_url.or(self.service_url),
            database_name: overrides.database_name.or(self.database_name),
        }
    }

    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            service_url: self
                .service_url
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            database_name: self
                .database_name
                .clone()
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        HomeConfig::default().resolve()
    }
}
