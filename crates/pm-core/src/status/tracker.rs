//! Load status tracker.
//!
//! Single authority for whether a catalog load may start, and for deciding
//! whether a finished load has been superseded.
//!
//! 加载状态追踪器：决定是否允许开始加载，并判断已完成的加载是否已过期。
//!
//! ```text
//! Idle --begin_load--> Loading --mark_loaded--> Loaded
//!                      Loading --mark_error---> Error
//! any  --reset-------> Idle
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use super::{Generation, LoadStatus};

struct TrackerState {
    status: LoadStatus,
    /// Generation allowed to commit results, `None` after a reset.
    current: Option<Generation>,
    last_minted: u64,
}

struct Shared {
    state: Mutex<TrackerState>,
    status_tx: watch::Sender<LoadStatus>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `status` if `generation` is still current.
    fn settle(&self, generation: Generation, status: LoadStatus) -> bool {
        let mut state = self.lock();
        if state.current != Some(generation) {
            debug!(%generation, "Ignoring settle from superseded load");
            return false;
        }
        debug!(%generation, status = ?status, "Load settled");
        state.status = status.clone();
        self.status_tx.send_replace(status);
        true
    }
}

/// Tracks the catalog load status and the current load generation.
///
/// Cloning is cheap and every clone observes the same state.
///
/// 追踪目录加载状态与当前加载代次。克隆共享同一状态。
#[derive(Clone)]
pub struct StatusTracker {
    shared: Arc<Shared>,
}

impl StatusTracker {
    pub fn new() -> Self {
        let (status_tx, _) = watch::channel(LoadStatus::Idle);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(TrackerState {
                    status: LoadStatus::Idle,
                    current: None,
                    last_minted: 0,
                }),
                status_tx,
            }),
        }
    }

    /// True only while idle. Loading, loaded and error all refuse a new start
    /// until [`reset`](Self::reset) is called.
    pub fn can_start(&self) -> bool {
        self.shared.lock().status.is_idle()
    }

    /// Enter `Loading` under a freshly minted generation.
    ///
    /// The idle check and the transition happen under one lock, so two
    /// callers racing here cannot both receive a ticket. Returns `None` when
    /// the tracker is not idle.
    ///
    /// 在同一把锁内检查空闲并切换到 `Loading`；非空闲时返回 `None`。
    pub fn begin_load(&self) -> Option<LoadTicket> {
        let mut state = self.shared.lock();
        if !state.status.is_idle() {
            return None;
        }

        state.last_minted += 1;
        let generation = Generation::new(state.last_minted);
        state.current = Some(generation);
        state.status = LoadStatus::Loading;
        self.shared.status_tx.send_replace(LoadStatus::Loading);
        debug!(%generation, "Load started");

        Some(LoadTicket {
            generation,
            shared: Arc::clone(&self.shared),
        })
    }

    /// Invalidate the current generation and return to `Idle`.
    ///
    /// No generation is minted here; the next [`begin_load`](Self::begin_load)
    /// mints one.
    pub fn reset(&self) {
        let mut state = self.shared.lock();
        if let Some(generation) = state.current.take() {
            debug!(%generation, "Generation invalidated by reset");
        }
        state.status = LoadStatus::Idle;
        self.shared.status_tx.send_replace(LoadStatus::Idle);
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> LoadStatus {
        self.shared.lock().status.clone()
    }

    /// Receiver notified on every status transition.
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.shared.status_tx.subscribe()
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StatusTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("StatusTracker")
            .field("status", &state.status)
            .field("current", &state.current)
            .finish()
    }
}

/// Handle for one load attempt, bound to the generation it was minted with.
///
/// Settling consumes the ticket, so a load reports its outcome at most once.
///
/// 单次加载尝试的句柄，绑定其代次；结算时消耗自身。
pub struct LoadTicket {
    generation: Generation,
    shared: Arc<Shared>,
}

impl LoadTicket {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True once a later load started or the tracker was reset.
    pub fn is_stale(&self) -> bool {
        self.shared.lock().current != Some(self.generation)
    }

    /// Transition to `Loaded`. No-op when stale; returns whether it applied.
    pub fn mark_loaded(self) -> bool {
        self.shared.settle(self.generation, LoadStatus::Loaded)
    }

    /// Transition to `Error(message)`. No-op when stale; returns whether it applied.
    pub fn mark_error(self, message: impl Into<String>) -> bool {
        self.shared
            .settle(self.generation, LoadStatus::Error(message.into()))
    }
}

impl std::fmt::Debug for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadTicket")
            .field("generation", &self.generation)
            .finish()
    }
}
