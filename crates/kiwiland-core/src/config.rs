//! Configuration for kiwiland (stored in ~/.config/kiwiland/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KiwilandError, Result};

pub use types::{KiwilandConfig, LimitsConfig, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_STOPS};

const CONFIG_DIR: &str = "kiwiland";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "KIWILAND_CONFIG_DIR";

impl KiwilandConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    KiwilandError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the configuration from the default location.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            KiwilandError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            max_stops = config.limits.max_stops,
            max_distance = config.limits.max_distance,
            "loaded config"
        );
        Ok(config)
    }
}

impl LimitsConfig {
    /// Reject a stop count above `max_stops`
    pub fn check_stops(&self, stops: usize) -> Result<()> {
        if stops > self.max_stops {
            return Err(KiwilandError::limit_exceeded(
                "stops",
                stops as u64,
                self.max_stops as u64,
            ));
        }
        Ok(())
    }

    /// Reject a distance bound above `max_distance`
    pub fn check_distance(&self, distance: u64) -> Result<()> {
        if distance > self.max_distance {
            return Err(KiwilandError::limit_exceeded(
                "distance",
                distance,
                self.max_distance,
            ));
        }
        Ok(())
    }
}
