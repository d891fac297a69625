//! Placement settings section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Spawn placement settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementSection {
    /// Minimum reachable-region size for a spawn point to be acceptable
    #[serde(default = "defaults::min_reachable_tiles")]
    pub min_reachable_tiles: usize,

    /// Candidates to try before giving up
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: usize,
}

impl Default for PlacementSection {
    fn default() -> Self {
        Self {
            min_reachable_tiles: 100,
            max_attempts: 8,
        }
    }
}
