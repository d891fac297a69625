//! Bounded graph search.
//!
//! This module provides breadth-first traversal over any [`Graph`]:
//!
//! - [`reachable`]: every node reachable from a start node, in discovery order
//! - [`shortest_path`]: shortest unit-cost path between two nodes
//!
//! Both searches are bounded by an iteration budget so they terminate even
//! on unbounded graphs, returning a partial region or an empty path instead
//! of running away.
//!
//! ```rust
//! use marga::search;
//! use marga::{TileCoord, TileKind, TileMap, TileMapGraph};
//!
//! let map = TileMap::from_ascii("....\n##..\n....").unwrap();
//! let graph = TileMapGraph::new(&map, |tile: &TileKind| tile.is_land());
//!
//! let region = search::reachable_set(&graph, TileCoord::new(0, 0));
//! assert_eq!(region.len(), 10);
//! assert!(search::path_exists(&graph, TileCoord::new(0, 0), TileCoord::new(0, 2)));
//! ```

mod bfs;
mod traits;

pub use bfs::{reachable, shortest_path};
pub use traits::Graph;

/// Iteration budget used by the convenience helpers.
///
/// A safety bound, not a semantic constant: the engine functions always take
/// the budget as an explicit parameter.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Shortest path with the default iteration budget
pub fn find_path<G: Graph>(graph: &G, start: G::Node, goal: G::Node) -> Vec<G::Node> {
    shortest_path(graph, start, goal, DEFAULT_MAX_ITERATIONS)
}

/// Check whether a path exists within the default iteration budget
pub fn path_exists<G: Graph>(graph: &G, start: G::Node, goal: G::Node) -> bool {
    !find_path(graph, start, goal).is_empty()
}

/// Reachable region with the default iteration budget
pub fn reachable_set<G: Graph>(graph: &G, start: G::Node) -> Vec<G::Node> {
    reachable(graph, start, DEFAULT_MAX_ITERATIONS)
}
