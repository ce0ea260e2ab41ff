//! Business logic use cases
//!
//! [page mount] → ParcelStore::initialize → ParcelCatalogPort
//! [live feed]  → ParcelStore::merge

pub mod parcel_store;

pub use parcel_store::{InitializeOutcome, ParcelStore, LOAD_ERROR_MESSAGE};
