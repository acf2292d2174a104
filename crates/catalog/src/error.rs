//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while handling the airport catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog text had no header row
    #[error("Catalog text has no header row")]
    MissingHeader,
}
