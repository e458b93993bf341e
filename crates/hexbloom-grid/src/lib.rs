//! Hexbloom Grid
//!
//! A growable grid of hex cells and the color diffusion that runs over it.
//!
//! # Growth
//!
//! A grid starts as the single origin cell and grows by ring expansion:
//! every missing neighbor of the current frontier is created, and the new
//! cells become the next frontier. Cells are never removed.
//!
//! # Diffusion
//!
//! Users lock cells to chosen colors. [`reflow`] then spreads those colors
//! outward one ring per iteration, blending wherever fronts meet, until the
//! grid reaches a fixed point or the step budget runs out.
//!
//! ```
//! use hexbloom_grid::{reflow, Grid, StepBudget};
//! use hexbloom_lattice::{Address, Rgb};
//!
//! let mut grid = Grid::with_radius(1, Rgb::WHITE);
//! grid.set_color(Address::ORIGIN, Rgb::new(255, 0, 0)).unwrap();
//!
//! let report = reflow(&mut grid, StepBudget::Unbounded);
//! assert!(report.converged());
//! assert_eq!(grid.initialized_count(), 7);
//! ```

mod cell;
mod diffusion;
mod error;
mod grid;

pub use cell::Cell;
pub use diffusion::{blend, iterate, reflow, IterationStats, ReflowReport, StepBudget, StopReason};
pub use error::{Error, Result};
pub use grid::{cells_within, Grid};
