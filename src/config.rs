//! Configuration loading and management
//!
//! Handles parsing of `.taskr.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::task::DEFAULT_PRIORITY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tasks configuration
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted task file, relative to the working directory
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    "tasks.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Task-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority assigned when `add` is called without one.
    /// Free-form text; `low`, `medium`, `high` are the documented levels.
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
        }
    }
}

impl Config {
    /// Name of the configuration file looked up in the working directory
    pub const FILE_NAME: &'static str = ".taskr.toml";

    /// Load configuration from a `.taskr.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(Self::FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage.path.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "storage.path cannot be empty".to_string(),
            ));
        }
        if self.tasks.default_priority.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "tasks.default_priority cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = tempdir().expect("tempdir");
        let config = Config::load_from_dir(dir.path());
        assert_eq!(config.storage.path, "tasks.json");
        assert_eq!(config.tasks.default_priority, "medium");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(Config::FILE_NAME);
        std::fs::write(&path, "[storage]\npath = \"state/tasks.json\"\n").expect("write");

        let config = Config::load_from_dir(dir.path());
        assert_eq!(config.storage.path, "state/tasks.json");
        assert_eq!(config.tasks.default_priority, "medium");
    }

    #[test]
    fn explicit_load_rejects_empty_fields() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(Config::FILE_NAME);
        std::fs::write(&path, "[storage]\npath = \"\"\n").expect("write");

        let err = Config::load(&path).expect_err("empty path");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(Config::FILE_NAME);
        std::fs::write(&path, "storage = nonsense [").expect("write");

        let config = Config::load_from_dir(dir.path());
        assert_eq!(config.storage.path, "tasks.json");
    }
}
