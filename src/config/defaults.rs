//! Default value functions for serde deserialization.

pub fn max_iterations() -> usize {
    1000
}

pub fn min_reachable_tiles() -> usize {
    100
}

pub fn max_attempts() -> usize {
    8
}
