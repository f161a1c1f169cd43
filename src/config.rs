//! Core configuration.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! resolve:
//!   max_depth: 64
//!   global_fallback: true
//! border:
//!   allow_degrade: true
//! device_density: medium
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::border::BorderOptions;
use crate::image::DensityTag;
use crate::resolve::ResolveOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub resolve: ResolveOptions,
    pub border: BorderOptions,
    /// Density used when a name resolves to a multi-image.
    pub device_density: DensityTag,
}

/// Error loading a [`CoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreConfig {
    pub fn from_yaml_str(source: &str) -> Result<CoreConfig, ConfigError> {
        if source.trim().is_empty() {
            return Ok(CoreConfig::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<CoreConfig, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_device_density(mut self, density: DensityTag) -> Self {
        self.device_density = density;
        self
    }
}
