//! Error type shared by model parsing and lookups.

use thiserror::Error;

/// Result alias using [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors produced while interpreting model data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A show kind string did not match any known variant.
    #[error("unknown show kind: {0:?}")]
    UnknownShowKind(String),
}
