//! Error types for hexbloom-session.

use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the interaction layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The target cell does not exist.
    #[error(transparent)]
    Grid(#[from] hexbloom_grid::Error),

    /// An address or color failed validation.
    #[error(transparent)]
    Lattice(#[from] hexbloom_lattice::Error),

    /// A render id that is not in the current dispatch table.
    #[error("unknown render id {0}")]
    UnknownRenderId(u64),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
