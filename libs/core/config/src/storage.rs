use crate::{env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Location of the JSON file backing the item store
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_path: PathBuf,
}

impl StorageConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

impl FromEnv for StorageConfig {
    /// DATA_PATH: defaults to `data/items.json`, relative to the working directory
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("DATA_PATH", DEFAULT_DATA_PATH);
        if raw.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "DATA_PATH".to_string(),
                details: "path must not be empty".to_string(),
            });
        }
        Ok(Self::new(raw.trim()))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}
