//! Catalog error type.

use thiserror::Error;

/// Result alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by catalog queries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded fixture failed to decode. Indicates a packaging
    /// problem rather than a runtime condition.
    #[error("catalog fixture is invalid: {0}")]
    Fixture(#[from] serde_json::Error),
}
