//! Error types for hexbloom-lattice.

use thiserror::Error;

/// Result type for lattice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when constructing addresses or colors from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Sublattice index was neither 0 nor 1.
    #[error("invalid sublattice {0}: expected 0 or 1")]
    InvalidSublattice(i64),

    /// A row or column too close to the `i64` limits for its neighbors to
    /// be addressable.
    #[error("{axis} {value} outside {min}..={max}", min = crate::Address::COORD_MIN, max = crate::Address::COORD_MAX)]
    CoordinateOutOfRange { axis: &'static str, value: i64 },

    /// A color channel fell outside 0..=255.
    #[error("invalid {channel} channel value {value}: expected 0..=255")]
    InvalidChannel { channel: &'static str, value: i64 },

    /// A color string was not of the form `#rrggbb`.
    #[error("invalid hex color {0:?}: expected #rrggbb")]
    InvalidHexColor(String),
}
