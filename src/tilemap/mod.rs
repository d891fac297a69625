//! Tile map storage and its graph view.
//!
//! - [`TileMap`]: rectangular tile storage with ASCII map notation
//! - [`TileSource`]: read-only tile lookup seam for any map-like surface
//! - [`TileMapGraph`]: presents a tile source as a [`Graph`](crate::search::Graph)
//!   of walkable cells

mod graph;
mod map;
mod traits;

pub use graph::TileMapGraph;
pub use map::{TileMap, TileMapError};
pub use traits::TileSource;
