use crate::error::{NomzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_PATH: &str = "restaurants.json";

/// Configuration for nomz, stored as config.json in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NomzConfig {
    /// Path of the dataset the CLI loads when --data is not given
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

impl Default for NomzConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

impl NomzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NomzError::Io)?;
        let config: NomzConfig =
            serde_json::from_str(&content).map_err(NomzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NomzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NomzError::Serialization)?;
        fs::write(config_path, content).map_err(NomzError::Io)?;
        Ok(())
    }
}
