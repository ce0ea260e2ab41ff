//! 地块存储：一次性加载目录并维护派生后的记录。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pm_core::ports::{CatalogPayload, ParcelCatalogPort};
use pm_core::{LoadStatus, Parcel, ParcelId, ParcelInput, StatusTracker};
use tokio::sync::watch;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// User-facing message for every failed catalog load.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading parcels";

/// What a call to [`ParcelStore::initialize`] ended up doing.
///
/// Purely diagnostic; the observable effect is always in
/// [`ParcelStore::status`] and [`ParcelStore::records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializeOutcome {
    /// A load was already attempted (or is in flight); nothing was requested.
    Skipped,
    /// The catalog was committed.
    Loaded { count: usize },
    /// The load failed and the status now carries [`LOAD_ERROR_MESSAGE`].
    Failed,
    /// The load was superseded by a reset before it finished.
    Discarded,
}

/// Session-wide parcel store.
///
/// Owns the id → [`Parcel`] mapping and a [`StatusTracker`] that allows the
/// catalog to be fetched once per session unless [`reset`](Self::reset) is
/// called. Construct one at startup and share it as `Arc<ParcelStore>`.
///
/// Lock order is records, then tracker. Neither lock is held across an
/// `.await`.
pub struct ParcelStore {
    catalog: Arc<dyn ParcelCatalogPort>,
    tracker: StatusTracker,
    records: Mutex<HashMap<ParcelId, Parcel>>,
}

impl ParcelStore {
    /// Create an empty, idle store backed by `catalog`.
    pub fn new(catalog: Arc<dyn ParcelCatalogPort>) -> Self {
        Self {
            catalog,
            tracker: StatusTracker::new(),
            records: Mutex::new(HashMap::new()),
        }
    }

    /// True while no load has been attempted since construction or the last
    /// reset.
    pub fn can_initialize(&self) -> bool {
        self.tracker.can_start()
    }

    /// Fetch the catalog once.
    ///
    /// No-op unless [`can_initialize`](Self::can_initialize) holds. A result
    /// whose generation was superseded while the request was in flight is
    /// dropped without touching records or status. Failures are logged and
    /// recorded as [`LoadStatus::Error`]; nothing is returned as an error.
    pub async fn initialize(&self) -> InitializeOutcome {
        let Some(ticket) = self.tracker.begin_load() else {
            debug!("Parcel catalog load already attempted, skipping");
            return InitializeOutcome::Skipped;
        };
        let generation = ticket.generation();
        let span = info_span!("usecase.parcel_store.initialize", %generation);

        async move {
            info!("Requesting parcel catalog");
            let result = self.catalog.fetch_catalog().await;

            if ticket.is_stale() {
                debug!("Discarding superseded catalog response");
                return InitializeOutcome::Discarded;
            }

            match result {
                Ok(payload) => {
                    let fresh = index_payload(payload);
                    let count = fresh.len();
                    {
                        let mut records = self.lock_records();
                        // A reset may have landed since the check above.
                        if ticket.is_stale() {
                            debug!("Discarding superseded catalog response");
                            return InitializeOutcome::Discarded;
                        }
                        *records = fresh;
                    }
                    ticket.mark_loaded();
                    info!(count, "Parcel catalog loaded");
                    InitializeOutcome::Loaded { count }
                }
                Err(err) => {
                    error!(error = %err, "Failed to load parcel catalog");
                    if ticket.mark_error(LOAD_ERROR_MESSAGE) {
                        InitializeOutcome::Failed
                    } else {
                        InitializeOutcome::Discarded
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Derive and upsert externally supplied records.
    ///
    /// An existing entry with the same id is replaced entirely. Status is not
    /// touched. Returns the number of records merged.
    pub fn merge<I>(&self, inputs: I) -> usize
    where
        I: IntoIterator<Item = ParcelInput>,
    {
        let derived: Vec<Parcel> = inputs.into_iter().map(Parcel::derive).collect();
        let count = derived.len();

        let mut records = self.lock_records();
        for parcel in derived {
            records.insert(parcel.id().clone(), parcel);
        }
        debug!(count, total = records.len(), "Merged parcels");
        count
    }

    /// Return to idle so the next [`initialize`](Self::initialize) fetches
    /// again. Any in-flight load becomes stale. Records stay until replaced.
    pub fn reset(&self) {
        let _records = self.lock_records();
        self.tracker.reset();
        info!("Parcel store reset");
    }

    /// Drop every record. Status is not touched.
    pub fn clear(&self) {
        self.lock_records().clear();
    }

    pub fn status(&self) -> LoadStatus {
        self.tracker.status()
    }

    /// Receiver notified on every status transition.
    pub fn subscribe_status(&self) -> watch::Receiver<LoadStatus> {
        self.tracker.subscribe()
    }

    /// Snapshot of the whole mapping.
    pub fn records(&self) -> HashMap<ParcelId, Parcel> {
        self.lock_records().clone()
    }

    pub fn get(&self, id: &ParcelId) -> Option<Parcel> {
        self.lock_records().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    fn lock_records(&self) -> MutexGuard<'_, HashMap<ParcelId, Parcel>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Key the payload by each record's own id, deriving every record.
fn index_payload(payload: CatalogPayload) -> HashMap<ParcelId, Parcel> {
    payload
        .into_iter()
        .map(|(key, input)| {
            if key != input.id.as_str() {
                warn!(key = %key, parcel_id = %input.id, "Catalog key does not match parcel id");
            }
            let parcel = Parcel::derive(input);
            (parcel.id().clone(), parcel)
        })
        .collect()
}
