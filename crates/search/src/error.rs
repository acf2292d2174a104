//! Error types for the search crate.
//!
//! The `Display` impl of [`SearchError::Failed`] is the exact string shown
//! to end users. Provider-specific detail never appears here; it is logged
//! at the point of failure and discarded at this boundary.

use thiserror::Error;

/// Errors surfaced by the search core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Any runtime failure of the search pipeline, with detail withheld
    /// from the user on purpose
    #[error("Failed to search airports. Please try again.")]
    Failed,

    /// The caller supplied a request that violates the search
    /// preconditions; a contract violation rather than a runtime fault
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),
}
