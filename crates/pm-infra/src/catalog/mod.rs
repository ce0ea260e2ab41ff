mod http;

pub use http::HttpParcelCatalog;
