//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, so the store can be exercised
//! without a network.

mod catalog;
pub mod errors;

#[cfg(any(test, feature = "testing"))]
pub mod mocks;

pub use catalog::{CatalogPayload, ParcelCatalogPort};
pub use errors::CatalogError;
