//! Load status domain module.

pub mod tracker;

pub use tracker::{LoadTicket, StatusTracker};

use std::fmt;

/// Catalog load status.
///
/// 目录加载状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load attempted since construction or the last reset.
    ///
    /// 尚未加载。
    Idle,
    /// A load is in flight.
    ///
    /// 加载中。
    Loading,
    /// The catalog was loaded.
    ///
    /// 已加载。
    Loaded,
    /// The load failed with a user-facing message.
    ///
    /// 加载失败。
    Error(String),
}

impl LoadStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for LoadStatus {
    fn default() -> Self {
        LoadStatus::Idle
    }
}

/// Token minted for each load attempt.
///
/// Only compared for equality with the tracker's current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}
