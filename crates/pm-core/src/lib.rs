//! # pm-core
//!
//! Core domain models and load coordination for ParcelMap.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod parcel;
pub mod ports;
pub mod status;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use parcel::{Parcel, ParcelId, ParcelInput, SizeClass, SizeLabel};
pub use status::{Generation, LoadStatus, LoadTicket, StatusTracker};
