//! Engine configuration loaded from YAML
//!
//! ```yaml
//! distance: exact      # or "truncate" (default)
//! snapshot:
//!   pretty: true
//! ```

use crate::algo::DistancePolicy;
use crate::storage::JsonStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Snapshot writing options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Write indented JSON
    pub pretty: bool,
}

/// Analysis engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How shortest-path distances are stored during relaxation
    pub distance: DistancePolicy,
    pub snapshot: SnapshotConfig,
}

impl EngineConfig {
    /// Parse configuration from YAML text. Missing fields take defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Default location (`<config dir>/dwgraph/config.yaml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dwgraph").join("config.yaml"))
    }

    /// Load an explicit file, or the default file if it exists, or defaults.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Snapshot backend configured by this config
    pub fn store(&self) -> JsonStore {
        JsonStore::new().pretty(self.snapshot.pretty)
    }
}
