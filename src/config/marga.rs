//! Top-level configuration and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::placement::PlacementConfig;

use super::error::ConfigLoadError;
use super::placement::PlacementSection;
use super::search::SearchSection;

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Spawn placement settings
    #[serde(default)]
    pub placement: PlacementSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to PlacementConfig
    pub fn to_placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            min_reachable: self.placement.min_reachable_tiles,
            max_attempts: self.placement.max_attempts,
            max_iterations: self.search.max_iterations,
        }
    }
}
