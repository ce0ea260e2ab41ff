use std::collections::BTreeMap;

use pm_app::{InitializeOutcome, ParcelStore};
use pm_core::config::AppConfig;
use pm_core::LoadStatus;
use tracing::{info, warn};

use super::wiring::wire_parcel_store;

/// Counts shown once the catalog has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub status: LoadStatus,
    pub total: usize,
    pub boosted: usize,
    /// Parcels per size label; unknown classes are counted under `"unknown"`.
    pub by_label: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn from_store(store: &ParcelStore) -> Self {
        let records = store.records();
        let mut by_label = BTreeMap::new();
        for parcel in records.values() {
            let label = parcel
                .size_label()
                .map(|l| l.as_str())
                .unwrap_or("unknown");
            *by_label.entry(label.to_string()).or_insert(0) += 1;
        }

        Self {
            status: store.status(),
            total: records.len(),
            boosted: records.values().filter(|p| p.has_boost()).count(),
            by_label,
        }
    }
}

/// Wire the store, load the catalog once, and log a summary.
///
/// A failed load is reported through the summary status, not as an error.
pub async fn run_app(config: AppConfig) -> anyhow::Result<CatalogSummary> {
    info!(url = %config.catalog_url, "Starting parcel map");
    let store = wire_parcel_store(&config)?;

    if store.can_initialize() {
        if let InitializeOutcome::Failed = store.initialize().await {
            warn!("Parcel catalog unavailable");
        }
    }

    let summary = CatalogSummary::from_store(&store);
    info!(
        status = ?summary.status,
        total = summary.total,
        boosted = summary.boosted,
        by_label = ?summary.by_label,
        "Parcel catalog summary"
    );
    Ok(summary)
}
