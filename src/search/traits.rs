//! The graph capability consumed by the search engine.

use std::hash::Hash;

/// A graph, seen purely as a neighbor-lookup capability.
///
/// The engine asks one question of a graph: "given a node, which nodes are
/// directly connected to it?". Nodes are opaque values that only need to be
/// comparable and hashable, so implementations range from tile maps
/// ([`TileMapGraph`](crate::tilemap::TileMapGraph)) to implicit, unbounded
/// graphs that compute neighbors on the fly.
///
/// The contract requires no particular neighbor ordering, but the ordering
/// an implementation produces decides which of several equally short paths
/// the search discovers first. Implementations should document theirs.
///
/// Searches never mutate the graph; a shared reference is all they take.
pub trait Graph {
    /// Node identifier
    type Node: Clone + Eq + Hash;

    /// Nodes directly connected to `node`.
    ///
    /// May be empty, and must be empty for nodes outside the graph's domain;
    /// the engine treats such nodes as isolated rather than invalid.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}
