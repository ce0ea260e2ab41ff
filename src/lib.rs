//! ParcelMap Library
//!
//! 地块目录加载库：启动、配置与依赖组装。

pub mod bootstrap;

// 重新导出常用类型
pub use bootstrap::{run_app, CatalogSummary};
pub use pm_app::{InitializeOutcome, ParcelStore};
pub use pm_core::{AppConfig, LoadStatus, Parcel, ParcelId, ParcelInput};
