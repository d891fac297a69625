//! The tile lookup capability backing the graph adapter.

use crate::core::TileCoord;

/// Read-only lookup of the tile occupying a cell.
///
/// Implemented by [`TileMap`](super::TileMap); callers with their own map
/// representation implement it to plug into
/// [`TileMapGraph`](super::TileMapGraph) without copying tiles.
pub trait TileSource {
    /// Tile value stored per cell
    type Tile;

    /// The tile at `coord`, or `None` when the cell is outside the map.
    fn tile_at(&self, coord: TileCoord) -> Option<Self::Tile>;
}
