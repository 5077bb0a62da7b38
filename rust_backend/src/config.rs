//! Configuration file support.
//!
//! This module reads the longitude settings from a TOML file:
//!
//! ```toml
//! [longitude]
//! wrap_lon = "auto"   # true | false | 180 | 360 | "auto" | "off" | "180" | "360"
//! ```
//!
//! Missing sections and fields fall back to [`WrapMode::Auto`].

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::coordinates::{normalize_longitudes, LonArray, WrapMode};
use crate::error::{LonError, LonResult};

/// Configuration file name searched by [`LongitudeConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "regionmask.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongitudeConfig {
    #[serde(default)]
    pub longitude: LongitudeSettings,
}

/// Longitude handling settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongitudeSettings {
    #[serde(default)]
    pub wrap_lon: WrapMode,
}

impl LongitudeConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(LongitudeConfig)` if successful
    /// * `Err(LonError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> LonResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            LonError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded longitude configuration from {} (wrap_lon = {})",
            path.as_ref().display(),
            config.longitude.wrap_lon
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> LonResult<Self> {
        toml::from_str(content).map_err(|e| {
            LonError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `regionmask.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> LonResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(LonError::Configuration(format!(
            "No {} found in standard locations",
            CONFIG_FILE_NAME
        )))
    }

    /// Serialize back to TOML text.
    pub fn to_toml_string(&self) -> LonResult<String> {
        toml::to_string(self).map_err(|e| {
            LonError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.longitude.wrap_lon
    }

    /// Normalize `lon` with the configured wrap mode.
    pub fn normalize<L: Into<LonArray>>(&self, lon: L) -> LonResult<LonArray> {
        normalize_longitudes(lon, self.wrap_mode())
    }
}
