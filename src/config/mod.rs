//! Configuration loading.
//!
//! All tunables load from a single YAML file; every field has a default so a
//! partial file, or no file at all, still yields a working configuration.

mod defaults;
mod error;
mod marga;
mod placement;
mod search;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use placement::PlacementSection;
pub use search::SearchSection;
