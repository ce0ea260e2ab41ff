//! Infrastructure adapters for ParcelMap.

pub mod catalog;

pub use catalog::HttpParcelCatalog;
