//! ParcelMap Application Orchestration Layer
//!
//! This crate contains the parcel store use case and its load coordination.

pub mod usecases;

pub use usecases::{InitializeOutcome, ParcelStore, LOAD_ERROR_MESSAGE};
