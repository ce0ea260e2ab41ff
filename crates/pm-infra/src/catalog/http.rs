//! HTTP-backed parcel catalog.
//! 基于 HTTP 的地块目录。

use anyhow::Context;
use async_trait::async_trait;
use pm_core::ports::{CatalogError, CatalogPayload, ParcelCatalogPort};
use pm_core::AppConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

/// Fetches the catalog with a single unauthenticated `GET`.
/// 通过一次无认证的 `GET` 请求获取目录。
pub struct HttpParcelCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpParcelCatalog {
    /// Create a catalog adapter with a pre-built client.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build the HTTP client from configuration.
    /// 根据配置构建 HTTP 客户端。
    ///
    /// An empty `user_agent` keeps the client default.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::new(client, config.catalog_url.clone()))
    }
}

#[async_trait]
impl ParcelCatalogPort for HttpParcelCatalog {
    async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError> {
        debug!(url = %self.url, "GET parcel catalog");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!("unexpected status {status}")));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(bytes = body.len(), "Parcel catalog received");

        serde_json::from_slice(&body).map_err(|err| CatalogError::Decode(err.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> CatalogError {
    if error.is_timeout() {
        CatalogError::Network(format!("request timed out: {error}"))
    } else if error.is_builder() {
        CatalogError::Network(format!("invalid request: {error}"))
    } else {
        CatalogError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use pm_core::ParcelId;

    fn build_catalog(url: String) -> HttpParcelCatalog {
        HttpParcelCatalog::from_config(&AppConfig::with_catalog_url(url)).unwrap()
    }

    fn sample_catalog() -> &'static str {
        r#"{
            "1": {
                "id": "1",
                "size": "2",
                "fudBoost": "0",
                "fomoBoost": "0",
                "alphaBoost": "0",
                "kekBoost": "0",
                "coordinateX": "3360",
                "coordinateY": "2352"
            },
            "2": {
                "id": 2,
                "size": 0,
                "fudBoost": "1",
                "fomoBoost": "0",
                "alphaBoost": "0",
                "kekBoost": "0"
            }
        }"#
    }

    #[tokio::test]
    async fn fetch_catalog_decodes_object_keyed_by_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/parcels.json")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_catalog())
            .create_async()
            .await;

        let catalog = build_catalog(format!("{}/parcels.json", server.url()));
        let payload = catalog.fetch_catalog().await.expect("catalog should decode");

        mock.assert_async().await;
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["1"].id, ParcelId::from("1"));
        assert_eq!(payload["1"].size.value(), Some(2));
        assert_eq!(payload["1"].extra["coordinateX"], "3360");
        assert_eq!(payload["2"].id, ParcelId::from(2u64));
        assert!(payload["2"].has_boost());
    }

    #[tokio::test]
    async fn fetch_catalog_keeps_records_with_unreadable_size() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/parcels.json")
            .with_status(200)
            .with_body(
                r#"{
                    "1": { "id": "1", "size": 1, "fudBoost": "0", "fomoBoost": "0", "alphaBoost": "0", "kekBoost": "0" },
                    "2": { "id": "2", "size": 18446744073709551615, "fudBoost": "0", "fomoBoost": "0", "alphaBoost": "0", "kekBoost": "0" },
                    "3": { "id": "3", "size": 2.5 },
                    "4": { "id": "4" }
                }"#,
            )
            .create_async()
            .await;

        let catalog = build_catalog(format!("{}/parcels.json", server.url()));
        let payload = catalog.fetch_catalog().await.unwrap();

        assert_eq!(payload.len(), 4);
        assert_eq!(payload["1"].size.value(), Some(1));
        assert!(payload["2"].size.is_unset());
        assert!(payload["3"].size.is_unset());
        assert!(payload["4"].size.is_unset());
    }

    #[tokio::test]
    async fn fetch_catalog_sends_configured_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/parcels.json")
            .match_header("user-agent", "parcelmap-test")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let config = AppConfig {
            catalog_url: format!("{}/parcels.json", server.url()),
            user_agent: "parcelmap-test".to_string(),
        };
        let catalog = HttpParcelCatalog::from_config(&config).unwrap();

        let payload = catalog.fetch_catalog().await.unwrap();

        mock.assert_async().await;
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn fetch_catalog_maps_invalid_json_to_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/parcels.json")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let catalog = build_catalog(format!("{}/parcels.json", server.url()));
        let err = catalog.fetch_catalog().await.unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_catalog_maps_wrong_shape_to_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/parcels.json")
            .with_status(200)
            .with_body(r#"[{"id": "1", "size": 0}]"#)
            .create_async()
            .await;

        let catalog = build_catalog(format!("{}/parcels.json", server.url()));
        let err = catalog.fetch_catalog().await.unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_catalog_maps_http_error_status_to_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/parcels.json")
            .with_status(404)
            .create_async()
            .await;

        let catalog = build_catalog(format!("{}/parcels.json", server.url()));
        let err = catalog.fetch_catalog().await.unwrap_err();

        match err {
            CatalogError::Network(message) => assert!(message.contains("404"), "{message}"),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_catalog_maps_invalid_url_to_network_error() {
        let catalog = build_catalog("not a url".to_string());

        let err = catalog.fetch_catalog().await.unwrap_err();

        assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");
    }
}
