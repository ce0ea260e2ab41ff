pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, DEFAULT_CATALOG_URL, DEFAULT_CONFIG_FILE};
pub use run::{run_app, CatalogSummary};
pub use wiring::{wire_parcel_store, WiringError};
