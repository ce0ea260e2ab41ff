use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(String),

    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),
}
