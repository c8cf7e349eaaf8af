use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::errors::{Error, Result};
use crate::configs::*;

const CONFIG_PATHS: [&str; 2] = ["config.toml", "config.default.toml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub volume: VolumeConfig,
    #[serde(default)]
    pub dither: DitherConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = CONFIG_PATHS
            .into_iter()
            .find(|p| Path::new(p).exists())
            .ok_or_else(|| Error::ConfigMissing(CONFIG_PATHS.join(" or ")))?;

        crate::log_println!("Loading configuration from: {}", config_path);
        Self::from_path(config_path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        if config_str.trim().is_empty() {
            return Err(Error::ConfigEmpty {
                path: path.display().to_string(),
            });
        }
        Self::from_toml_str(&config_str)
    }

    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.output.concrete_format()?;
        self.volume.range()?;
        Ok(())
    }
}
