//! Calculator configuration file support.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [trace]
//! angle_decimals = 4
//! parsec_decimals = 4
//! light_year_decimals = 2
//!
//! [validation]
//! reject_invalid = true
//! ```
//!
//! Every key is optional; missing keys fall back to [`CalculatorConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::services::trace::TraceFormat;

/// Calculator configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub trace: TraceFormat,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// How front ends treat invalid star descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Refuse non-positive parallaxes instead of computing with the 0 pc sentinel.
    #[serde(default = "default_reject_invalid")]
    pub reject_invalid: bool,
}

fn default_reject_invalid() -> bool {
    true
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            reject_invalid: default_reject_invalid(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `stellar_distance.toml` in:
    /// 1. Current directory
    /// 2. `stellar_distance/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("stellar_distance.toml"),
            PathBuf::from("stellar_distance/stellar_distance.toml"),
            PathBuf::from("../stellar_distance.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// [`Self::from_default_location`], falling back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::from_default_location() {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            other => other,
        }
    }
}
