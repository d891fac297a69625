//! Tile coordinate type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Tile coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl TileCoord {
    /// Create a new tile coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &TileCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected maps
    #[inline]
    pub fn chebyshev_distance(&self, other: &TileCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// The 4 cardinal neighbors, in N, E, S, W order.
    ///
    /// This order is load-bearing for search: it decides which of several
    /// equally short paths is discovered first.
    #[inline]
    pub fn neighbors_4(&self) -> [TileCoord; 4] {
        [
            TileCoord::new(self.x, self.y + 1), // North
            TileCoord::new(self.x + 1, self.y), // East
            TileCoord::new(self.x, self.y - 1), // South
            TileCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// The 8 neighbors (including diagonals), clockwise from North.
    #[inline]
    pub fn neighbors_8(&self) -> [TileCoord; 8] {
        [
            TileCoord::new(self.x, self.y + 1),     // N
            TileCoord::new(self.x + 1, self.y + 1), // NE
            TileCoord::new(self.x + 1, self.y),     // E
            TileCoord::new(self.x + 1, self.y - 1), // SE
            TileCoord::new(self.x, self.y - 1),     // S
            TileCoord::new(self.x - 1, self.y - 1), // SW
            TileCoord::new(self.x - 1, self.y),     // W
            TileCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }
}

impl Add for TileCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TileCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for TileCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        TileCoord::new(self.x - other.x, self.y - other.y)
    }
}
