//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP catalog) / 创建 infra 层具体实现
//! - ✅ Inject them into the parcel store / 将依赖注入到地块存储
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide when to load or reload the catalog
//! - 不决定何时加载或重新加载目录
//!
//! > **This is the only place allowed to depend on pm-infra + pm-app simultaneously.**
//! > **这是唯一允许同时依赖 pm-infra 和 pm-app 的地方。**

use std::sync::Arc;

use pm_app::ParcelStore;
use pm_core::config::AppConfig;
use pm_core::ports::ParcelCatalogPort;
use pm_infra::HttpParcelCatalog;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Catalog client initialization failed: {0}")]
    CatalogInit(String),
}

/// Create the catalog adapter described by `config`.
pub fn create_catalog(config: &AppConfig) -> WiringResult<Arc<dyn ParcelCatalogPort>> {
    let catalog = HttpParcelCatalog::from_config(config)
        .map_err(|e| WiringError::CatalogInit(format!("{e:#}")))?;
    Ok(Arc::new(catalog))
}

/// Assemble the session-wide parcel store.
/// 组装会话级地块存储。
pub fn wire_parcel_store(config: &AppConfig) -> WiringResult<Arc<ParcelStore>> {
    let catalog = create_catalog(config)?;
    Ok(Arc::new(ParcelStore::new(catalog)))
}
