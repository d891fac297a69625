//! Search settings section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Frontier-expansion budget per search call
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Enable 8-directional movement
    #[serde(default)]
    pub allow_diagonal: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            allow_diagonal: false,
        }
    }
}
