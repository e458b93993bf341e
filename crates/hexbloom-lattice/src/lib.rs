//! Hexbloom Lattice
//!
//! Addressing for an infinite pointy-top hexagon tiling, realized as two
//! interleaved triangular sublattices.
//!
//! # Addresses
//!
//! A cell is addressed by `(sublattice, row, column)`. Cells on the same
//! sublattice and row are horizontal neighbors (column ± 1). The other four
//! neighbors live on the opposite sublattice, one row up or down depending
//! on which sublattice the cell is on:
//!
//! ```text
//! (1-s, r-(1-s), c-(1-s))  (1-s, r-(1-s), c+s)
//! (s, r, c-1)              (s, r, c+1)
//! (1-s, r+s, c-(1-s))      (1-s, r+s, c+s)
//! ```
//!
//! All neighbor arithmetic is integer-only; the plane position is only
//! needed to draw the tiling.

mod address;
mod color;
mod error;
mod neighbors;
mod render;

pub use address::{Address, Sublattice};
pub use color::Rgb;
pub use error::{Error, Result};
pub use neighbors::{are_neighbors, count_present_neighbors, NEIGHBOR_COUNT};
pub use render::{hex_corners, SQRT_3};
