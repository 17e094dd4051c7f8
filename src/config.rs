//! Proximity-search configuration.

use crate::error::{GeocellError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tunables for [`crate::proximity::proximity_fetch`].
///
/// Construct with [`ProximityConfig::new`] or [`ProximityConfig::default`],
/// adjust via the builder methods, then call [`ProximityConfig::validate`]
/// before use (the proximity search itself does not re-validate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    max_results: usize,
    max_distance_m: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_distance_m: 0.0,
        }
    }
}

impl ProximityConfig {
    /// Same as [`ProximityConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of results returned. Builder-style.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Caps search radius in meters; `0.0` means unbounded. Builder-style.
    pub fn with_max_distance_m(mut self, max_distance_m: f64) -> Self {
        self.max_distance_m = max_distance_m;
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn max_distance_m(&self) -> f64 {
        self.max_distance_m
    }

    /// Whether `max_distance_m` is set (nonzero).
    pub fn has_distance_cap(&self) -> bool {
        self.max_distance_m > 0.0
    }

    /// Checks that `max_results` is nonzero and `max_distance_m` is
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(GeocellError::ZeroMaxResults);
        }
        if self.max_distance_m < 0.0 {
            return Err(GeocellError::NegativeMaxDistance(self.max_distance_m));
        }
        Ok(())
    }

    /// Loads a config from JSON text.
    pub fn from_json_str(s: &str) -> std::result::Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Serializes this config to JSON text.
    pub fn to_json_string(&self) -> std::result::Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::JsonSerialize)
    }

    /// Loads a config from TOML text. Requires the `toml` feature.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Serializes this config to TOML text. Requires the `toml` feature.
    #[cfg(feature = "toml")]
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSerialize)
    }
}

/// Errors (de)serializing a [`ProximityConfig`]. `validate()`'s own failures
/// use [`GeocellError`] instead, per the crate's single error type for
/// value-construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(serde_json::Error),
    #[error("failed to serialize config as JSON: {0}")]
    JsonSerialize(serde_json::Error),
    #[cfg(feature = "toml")]
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "toml")]
    #[error("failed to serialize config as TOML: {0}")]
    TomlSerialize(toml::ser::Error),
}

impl fmt::Display for ProximityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProximityConfig {{ max_results: {}, max_distance_m: {} }}",
            self.max_results, self.max_distance_m
        )
    }
}
