//! Spawn placement policy.
//!
//! Decides where to put an agent on a graph so that it does not start boxed
//! into a dead pocket: pick a random candidate node, measure the region
//! reachable from it, and accept only when the region is large enough.
//!
//! This sits strictly above the search engine: it consumes
//! [`reachable`](crate::search::reachable) output like any other caller and
//! the engine knows nothing about it. The retry is a bounded loop, not
//! recursion: on a map with no valid position it gives up after
//! `max_attempts` instead of spinning forever.

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::search::{self, Graph};

/// Placement policy settings
#[derive(Clone, Debug)]
pub struct PlacementConfig {
    /// Minimum reachable-region size for a spawn point to be acceptable
    pub min_reachable: usize,
    /// How many candidates to try before giving up
    pub max_attempts: usize,
    /// Iteration budget for each reachability probe
    pub max_iterations: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_reachable: 100,
            max_attempts: 8,
            max_iterations: search::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Pick a spawn node from `candidates` whose reachable region has at least
/// `config.min_reachable` nodes.
///
/// Candidates are sampled uniformly with replacement; `None` when the
/// candidate list is empty or every sampled candidate was rejected within
/// `config.max_attempts`.
pub fn choose_spawn<G, R>(
    graph: &G,
    candidates: &[G::Node],
    config: &PlacementConfig,
    rng: &mut R,
) -> Option<G::Node>
where
    G: Graph,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        warn!("[Placement] no candidate tiles to spawn on");
        return None;
    }

    for attempt in 1..=config.max_attempts {
        let candidate = candidates.choose(rng)?;
        let region = search::reachable(graph, candidate.clone(), config.max_iterations);

        if region.len() >= config.min_reachable {
            debug!(
                "[Placement] accepted candidate on attempt {} ({} tiles reachable)",
                attempt,
                region.len()
            );
            return Some(candidate.clone());
        }

        debug!(
            "[Placement] rejected candidate on attempt {}: {} reachable, {} required",
            attempt,
            region.len(),
            config.min_reachable
        );
    }

    warn!(
        "[Placement] no candidate with {} reachable tiles after {} attempts",
        config.min_reachable, config.max_attempts
    );
    None
}
