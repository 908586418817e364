//! Generator configuration files
//!
//! Configurations are stored as RON:
//!
//! ```text
//! (
//!     resolution: (x: 4, y: 2, z: 4),
//!     roundness: 1,
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROUNDNESS;
use crate::layout::BoxResolution;

/// Parameters of one rounded cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedCubeConfig {
    pub resolution: BoxResolution,
    pub roundness: u32,
}

impl Default for RoundedCubeConfig {
    fn default() -> Self {
        Self {
            resolution: BoxResolution::default(),
            roundness: DEFAULT_ROUNDNESS,
        }
    }
}

impl RoundedCubeConfig {
    pub fn new(resolution: BoxResolution, roundness: u32) -> Self {
        Self {
            resolution,
            roundness,
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Parse configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
