//! Parcel domain module.
//!
//! Raw catalog records, the fixed size table, and the derivation that turns
//! one into an enriched [`Parcel`].

pub mod record;
pub mod size;
mod wire;

pub use record::{Parcel, ParcelId, ParcelInput};
pub use size::{SizeClass, SizeLabel, SizeSpec};

/// Boost value meaning "no boost".
pub const NO_BOOST: &str = "0";

/// Keys owned by the derivation. They are stripped from incoming extra
/// attributes so a record never carries a stale copy.
pub const DERIVED_KEYS: &[&str] = &["sizeLabel", "width", "height", "hasBoost"];
