//! # Marga: Bounded BFS over Tile Maps
//!
//! Graph-traversal primitives for tile-based worlds: breadth-first
//! reachability and shortest-path search over an abstract graph contract,
//! plus an adapter that turns any tile map with a walkable-tile predicate
//! into such a graph.
//!
//! Every search takes an iteration budget, so traversal terminates even on
//! cyclic or unbounded graphs. Running out of budget is not an error; it
//! degrades to a partial reachable region or an empty path.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::search;
//! use marga::{TileCoord, TileKind, TileMap, TileMapGraph};
//!
//! // A strip of grass with a mountain ridge across the middle
//! let map = TileMap::from_ascii(".....\n####.\n.....").unwrap();
//!
//! let graph = TileMapGraph::new(&map, |tile: &TileKind| tile.is_land());
//! let path = search::find_path(&graph, TileCoord::new(0, 0), TileCoord::new(0, 2));
//!
//! // the only way around the ridge is through the gap at x = 4
//! assert_eq!(path.len(), 11);
//! assert_eq!(path.first(), Some(&TileCoord::new(0, 0)));
//! assert_eq!(path.last(), Some(&TileCoord::new(0, 2)));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`TileCoord`], [`TileKind`])
//! - [`search`]: the bounded BFS engine and the [`Graph`](search::Graph) contract
//! - [`tilemap`]: tile map storage and its graph adapter
//! - [`placement`]: spawn placement policy layered on top of the engine
//! - [`config`]: YAML configuration
//!
//! The engine in [`search`] is independent of tile maps: anything
//! implementing [`Graph`](search::Graph) can be searched, including implicit
//! graphs whose neighbors are computed on the fly.

pub mod config;
pub mod core;
pub mod placement;
pub mod search;
pub mod tilemap;

pub use crate::config::MargaConfig;
pub use crate::core::{TileCoord, TileKind};
pub use crate::placement::{PlacementConfig, choose_spawn};
pub use crate::tilemap::{TileMap, TileMapError, TileMapGraph, TileSource};
