use std::collections::HashMap;

use async_trait::async_trait;

use crate::parcel::ParcelInput;

use super::errors::CatalogError;

/// Decoded catalog payload: object key → raw parcel fields.
pub type CatalogPayload = HashMap<String, ParcelInput>;

/// Port for fetching the parcel catalog.
///
/// 地块目录获取端口。
///
/// # Behavior / 行为
/// - One unauthenticated request per call; no retry, no caching.
/// - Transport failures map to [`CatalogError::Network`], malformed bodies to
///   [`CatalogError::Decode`].
///
/// - 每次调用发起一次无认证请求；不重试、不缓存。
#[async_trait]
pub trait ParcelCatalogPort: Send + Sync {
    /// Fetch and decode the whole catalog.
    ///
    /// 获取并解码完整目录。
    async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError>;
}
