use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrBookConfig {
    /// Snapshot file name; relative paths resolve against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_window_days")]
    pub birthday_window_days: u32,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for AddrBookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window_days: default_window_days(),
        }
    }
}

impl AddrBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AddrBookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrBookError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(AddrBookError::Io)?;
        Ok(())
    }

    /// Snapshot path for this config under `home`.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            home.join(file)
        }
    }
}
