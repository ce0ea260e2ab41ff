//! Mock implementations of ports for testing.
//!
//! This module provides mock implementations using `mockall` for unit testing
//! code that depends on the catalog without a real HTTP server.

use async_trait::async_trait;
use mockall::mock;

use crate::ports::{CatalogError, CatalogPayload, ParcelCatalogPort};

mock! {
    /// Mock implementation of [`ParcelCatalogPort`].
    ///
    /// Use this for testing code that loads the catalog without requiring
    /// network access.
    pub Catalog {}

    #[async_trait]
    impl ParcelCatalogPort for Catalog {
        async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError>;
    }
}
