//! Global ballotwatch configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{BallotError, BallotResult};

static DEFAULT_DATA_DIR: &str = "~/.ballotwatch";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/ballotwatch/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct BallotwatchConfig {
    /// Where the events file lives, `~`-expanded at use.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for BallotwatchConfig {
    fn default() -> Self {
        BallotwatchConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl BallotwatchConfig {
    pub fn config_path() -> BallotResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BallotError::Config("Could not determine config directory".into()))?
            .join("ballotwatch");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> BallotResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: BallotwatchConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| BallotError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BallotError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The events snapshot file inside the (tilde-expanded) data directory.
    pub fn events_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded).join("events.json")
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> BallotResult<()> {
        let contents = format!(
            "\
# ballotwatch configuration

# Where your tracked events are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BallotError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BallotError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
