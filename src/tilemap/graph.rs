//! Graph adapter over a tile source.

use crate::core::TileCoord;
use crate::search::Graph;

use super::traits::TileSource;

/// A tile source viewed as a graph of walkable cells.
///
/// Borrows the source together with an allowed-tile predicate; two cells are
/// connected when they are orthogonally adjacent and both hold tiles the
/// predicate accepts. Cells outside the source are excluded because their
/// lookup yields no tile at all.
///
/// Neighbors are produced in N, E, S, W order (then the diagonals, clockwise,
/// when enabled), which makes the adapter's tie-break among equally short
/// paths deterministic: the route discovered first under that order wins.
///
/// The adapter is a read-only view. The underlying source must not change
/// while a search over the adapter is in flight; nothing here detects that.
///
/// ```rust
/// use marga::{TileCoord, TileKind, TileMap, TileMapGraph};
/// use marga::search::Graph;
///
/// let map = TileMap::from_ascii(
///     ".w\n\
///      ..",
/// )
/// .unwrap();
/// let graph = TileMapGraph::new(&map, |tile: &TileKind| tile.is_land());
///
/// // water to the east, map edge to the north and west
/// assert_eq!(
///     graph.neighbors(&TileCoord::new(0, 0)),
///     vec![TileCoord::new(0, 1)],
/// );
/// ```
pub struct TileMapGraph<'a, S, F> {
    source: &'a S,
    is_allowed: F,
    diagonal: bool,
}

impl<'a, S, F> TileMapGraph<'a, S, F>
where
    S: TileSource,
    F: Fn(&S::Tile) -> bool,
{
    /// View `source` as a 4-connected graph of cells passing `is_allowed`
    pub fn new(source: &'a S, is_allowed: F) -> Self {
        Self {
            source,
            is_allowed,
            diagonal: false,
        }
    }

    /// Switch to 8-connectivity (diagonal movement)
    pub fn with_diagonals(mut self) -> Self {
        self.diagonal = true;
        self
    }

    /// Does the cell hold a tile the predicate accepts?
    pub fn is_open(&self, coord: TileCoord) -> bool {
        self.source
            .tile_at(coord)
            .is_some_and(|tile| (self.is_allowed)(&tile))
    }

    fn collect_open(&self, candidates: impl IntoIterator<Item = TileCoord>) -> Vec<TileCoord> {
        candidates
            .into_iter()
            .filter(|&c| self.is_open(c))
            .collect()
    }
}

impl<S, F> Graph for TileMapGraph<'_, S, F>
where
    S: TileSource,
    F: Fn(&S::Tile) -> bool,
{
    type Node = TileCoord;

    fn neighbors(&self, node: &TileCoord) -> Vec<TileCoord> {
        if self.diagonal {
            self.collect_open(node.neighbors_8())
        } else {
            self.collect_open(node.neighbors_4())
        }
    }
}
