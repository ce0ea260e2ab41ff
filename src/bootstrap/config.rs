//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Fill bootstrap defaults for missing facts / 为缺失值填充启动默认值
//!
//! `load_config` accepts whatever is in the file. Defaults are applied only by
//! `resolve_config`, never by the DTO.

use anyhow::Context;
use std::path::{Path, PathBuf};
use pm_core::config::AppConfig;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parcelmap.toml";

/// Catalog served next to the map page.
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8080/parcels.json";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: an empty or malformed URL is a fact that
/// surfaces later as a failed load.
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the config file if it exists, then fill bootstrap defaults.
/// 若配置文件存在则加载，然后填充启动默认值。
pub fn resolve_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = if config_path.exists() {
        load_config(config_path.to_path_buf())?
    } else {
        tracing::info!(path = %config_path.display(), "Config file not found, using defaults");
        AppConfig::empty()
    };

    if config.catalog_url.is_empty() {
        config.catalog_url = DEFAULT_CATALOG_URL.to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [catalog]
            url = "https://parcels.example/parcels.json"
            user_agent = "parcelmap/test"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.catalog_url, "https://parcels.example/parcels.json");
        assert_eq!(config.user_agent, "parcelmap/test");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[catalog\nurl = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/parcelmap.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_uses_default_url_without_file() {
        let dir = tempfile::tempdir().unwrap();

        let config = resolve_config(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();

        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.user_agent, "");
    }

    #[test]
    fn test_resolve_config_fills_empty_url_but_keeps_other_fields() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nuser_agent = \"agent\"\n")
            .unwrap();

        let config = resolve_config(temp_file.path()).unwrap();

        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.user_agent, "agent");
    }
}
