//! Error types for hexbloom-grid.

use hexbloom_lattice::Address;
use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No cell exists at the given address.
    #[error("no cell at {0}")]
    UnknownAddress(Address),
}
