// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::paths::AppPaths;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_horizon_days() -> u32 {
    7
}
fn default_export_file() -> String {
    "events-store.json".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// How many days ahead the upcoming-events window reaches.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Destination for the newline-delimited JSON export.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            horizon_days: 7,
            export_file: "events-store.json".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing. A present-but-broken file is reported, then ignored.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                if !e.to_string().contains("Config file not found") {
                    log::warn!("Falling back to default config: {}", e);
                }
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)?;
        Ok(())
    }
}
