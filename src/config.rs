// Catalog configuration, loaded from TOML.

use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::structural::proxy::AccessPolicy;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "DESIGN_PATTERNS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for the patterns that carry policy.
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub access: AccessPolicy,
}

lazy_static! {
    static ref GLOBAL: CatalogConfig = CatalogConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to default catalog config");
        CatalogConfig::default()
    });
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading catalog config");
        Self::from_toml_str(&content)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Process-wide configuration, loaded on first access.
    pub fn global() -> &'static CatalogConfig {
        &GLOBAL
    }
}
