use crate::error::{PhotoGpsError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_output_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output_name: "gps_metadata.csv".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoGpsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-gps").join("config.json"))
    }

    pub fn set_output_name(&mut self, name: String) -> Result<()> {
        self.default_output_name = name;
        self.save()
    }
}
