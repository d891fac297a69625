//! Rectangular tile map storage.

use thiserror::Error;

use crate::core::{TileCoord, TileKind};

use super::traits::TileSource;

/// Error raised while building a [`TileMap`] from map notation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TileMapError {
    #[error("map notation has no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized tile character '{0}'")]
    UnknownTileChar(char),
}

/// Rectangular tile map.
///
/// Cells are addressed by [`TileCoord`] with `(0, 0)` at the top-left of the
/// map notation, x growing rightward and y downward through the rows. Tiles
/// are stored row-major as their `u8` repr.
///
/// Lookups outside the bounds yield [`TileKind::Unknown`] (or `None` through
/// the [`TileSource`] seam) and writes outside the bounds are ignored, so
/// callers never need a bounds check of their own.
#[derive(Clone, Debug)]
pub struct TileMap {
    /// Tile kinds as u8, row-major
    tiles: Vec<u8>,
    /// Map width in tiles
    width: usize,
    /// Map height in tiles
    height: usize,
}

impl TileMap {
    /// Create a map with every cell Unknown
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Unknown)
    }

    /// Create a map with every cell set to `kind`
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self {
            tiles: vec![kind as u8; width * height],
            width,
            height,
        }
    }

    /// Parse a map from ASCII notation, one row per line.
    ///
    /// Characters follow [`TileKind::as_char`]; blank lines are skipped, so
    /// indented string literals work without ceremony. All rows must be the
    /// same width.
    pub fn from_ascii(notation: &str) -> Result<Self, TileMapError> {
        let rows: Vec<&str> = notation
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(TileMapError::Empty);
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TileMapError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for c in line.chars() {
                let kind = TileKind::from_char(c).ok_or(TileMapError::UnknownTileChar(c))?;
                tiles.push(kind as u8);
            }
        }

        Ok(Self {
            tiles,
            width,
            height: rows.len(),
        })
    }

    /// Render the map back to ASCII notation
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.tile(TileCoord::new(x as i32, y as i32)).as_char());
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }

    /// Map width in tiles
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in tiles
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the coordinate inside the map?
    #[inline]
    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    #[inline]
    fn index(&self, coord: TileCoord) -> usize {
        (coord.y as usize) * self.width + (coord.x as usize)
    }

    /// The tile at `coord`; Unknown outside the bounds
    #[inline]
    pub fn tile(&self, coord: TileCoord) -> TileKind {
        if self.in_bounds(coord) {
            TileKind::from_u8(self.tiles[self.index(coord)])
        } else {
            TileKind::Unknown
        }
    }

    /// Set the tile at `coord`; ignored outside the bounds
    #[inline]
    pub fn set_tile(&mut self, coord: TileCoord, kind: TileKind) {
        if self.in_bounds(coord) {
            let idx = self.index(coord);
            self.tiles[idx] = kind as u8;
        }
    }

    /// Iterate every coordinate of the map, row by row
    pub fn coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| TileCoord::new(x as i32, y as i32)))
    }

    /// Coordinates of every tile satisfying `predicate`.
    ///
    /// The usual way to gather spawn candidates before
    /// [`choose_spawn`](crate::placement::choose_spawn).
    pub fn tiles_matching<F>(&self, predicate: F) -> Vec<TileCoord>
    where
        F: Fn(TileKind) -> bool,
    {
        self.coords().filter(|&c| predicate(self.tile(c))).collect()
    }
}

impl TileSource for TileMap {
    type Tile = TileKind;

    #[inline]
    fn tile_at(&self, coord: TileCoord) -> Option<TileKind> {
        if self.in_bounds(coord) {
            Some(TileKind::from_u8(self.tiles[self.index(coord)]))
        } else {
            None
        }
    }
}
