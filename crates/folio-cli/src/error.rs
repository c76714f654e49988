//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the catalog or configuration layer
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Output serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
