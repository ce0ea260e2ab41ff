//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog URL (may be empty - this is a fact, not an error)
    /// 目录地址（可能为空 - 这就是事实，不是错误）
    pub catalog_url: String,

    /// User-Agent header sent with the catalog request, empty for the client default
    pub user_agent: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            catalog_url: toml_value
                .get("catalog")
                .and_then(|c| c.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            user_agent: toml_value
                .get("catalog")
                .and_then(|c| c.get("user_agent"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            catalog_url: String::new(),
            user_agent: String::new(),
        }
    }

    /// Create AppConfig pointing at a catalog URL, everything else empty.
    pub fn with_catalog_url(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            ..Self::empty()
        }
    }
}
