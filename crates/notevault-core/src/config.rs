// crates/notevault-core/src/config.rs - Persisted Configuration
//
// The vault manager remembers exactly one setting across sessions: where the
// vault lives. It is stored as a small JSON document in the user's home
// directory:
//
// ```json
// {
//   "vaultPath": "/home/me/notes"
// }
// ```
//
// LIFECYCLE:
// - Read once when the session starts
// - Rewritten every time the vault path changes
// - A missing file is not an error: an empty record is written and returned,
//   so the file always exists after the first run
//
// An empty vault path is a valid state. No default location is invented; note
// operations simply fail until the user runs `setvault`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the config document inside the home directory
pub const CONFIG_FILE_NAME: &str = ".vaultconfig.json";

/// Errors that can occur while loading or saving the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error on config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The persisted settings record
///
/// Unknown fields are ignored on read so newer config files still load.
/// A document without `vaultPath` yields an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the notes; empty until configured
    #[serde(rename = "vaultPath")]
    pub vault_path: String,
}

impl Config {
    pub fn with_vault_path(vault_path: impl Into<String>) -> Self {
        Self {
            vault_path: vault_path.into(),
        }
    }
}

/// Loads and saves [`Config`] at a fixed file location
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file (used for overrides and tests)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `~/.vaultconfig.json`
    ///
    /// Falls back to `./.vaultconfig.json` when the home directory cannot
    /// be determined.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| Path::new(".").join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, creating an empty one on first run
    ///
    /// ERROR HANDLING:
    /// - Missing file: write an empty record and return it
    /// - Unreadable file or invalid JSON: returned to the caller, which is
    ///   expected to report it and keep running
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config file missing, writing default");
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Overwrite the config file with a pretty-printed document
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        let data = serde_json::to_string_pretty(config)?;

        fs::write(&self.path, data).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), vault_path = %config.vault_path, "config saved");
        Ok(())
    }
}
