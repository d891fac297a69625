//! Tile identities.

use serde::{Deserialize, Serialize};

/// Terrain tile kind occupying a map cell.
///
/// What an agent may walk on is not a property of the kind itself; the
/// graph adapter takes an allowed-tile predicate from the caller.
/// [`TileKind::is_land`] is one common predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    /// Cell with no tile assigned
    #[default]
    Unknown = 0,

    /// Open grassland
    Grass = 1,

    /// Rolling hills, slower but passable on foot
    Hills = 2,

    /// Swampland, passable on foot
    Swamp = 3,

    /// Open water
    Water = 4,

    /// Impassable mountain ridge
    Mountain = 5,
}

impl TileKind {
    /// Walkable-on-foot predicate: grass, hills and swamp.
    #[inline]
    pub fn is_land(self) -> bool {
        matches!(self, TileKind::Grass | TileKind::Hills | TileKind::Swamp)
    }

    /// Convert from u8 (for deserialization from raw map storage)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => TileKind::Grass,
            2 => TileKind::Hills,
            3 => TileKind::Swamp,
            4 => TileKind::Water,
            5 => TileKind::Mountain,
            _ => TileKind::Unknown,
        }
    }

    /// Single character representation for map notation and debugging
    pub fn as_char(self) -> char {
        match self {
            TileKind::Unknown => '?',
            TileKind::Grass => '.',
            TileKind::Hills => ':',
            TileKind::Swamp => '~',
            TileKind::Water => 'w',
            TileKind::Mountain => '#',
        }
    }

    /// Parse a map-notation character back into a tile kind
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(TileKind::Unknown),
            '.' => Some(TileKind::Grass),
            ':' => Some(TileKind::Hills),
            '~' => Some(TileKind::Swamp),
            'w' => Some(TileKind::Water),
            '#' => Some(TileKind::Mountain),
            _ => None,
        }
    }
}
