//! The address-to-cell map and its ring expansion.
//!
//! Membership only grows: cells are created by [`Grid::expand`] and never
//! removed. Diffusion and user intents mutate cells in place.

use std::collections::{BTreeMap, BTreeSet};

use hexbloom_lattice::{Address, Rgb};
use tracing::{debug, trace};

use crate::{Cell, Error, Result};

/// Number of cells within `radius` rings of the origin.
///
/// Ring 0 holds the origin alone; ring n > 0 holds 6n cells.
#[inline]
pub const fn cells_within(radius: u64) -> u64 {
    1 + 3 * radius * (radius + 1)
}

/// A growable hex grid rooted at the origin.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: BTreeMap<Address, Cell>,
    default_color: Rgb,
}

impl Grid {
    /// A grid holding only the origin cell.
    pub fn new(default_color: Rgb) -> Self {
        let mut cells = BTreeMap::new();
        cells.insert(Address::ORIGIN, Cell::new(Address::ORIGIN, default_color));
        Self {
            cells,
            default_color,
        }
    }

    /// A grid grown `radius` rings out from the origin.
    pub fn with_radius(radius: u32, default_color: Rgb) -> Self {
        let mut grid = Self::new(default_color);
        grid.grow(&[Address::ORIGIN], radius);
        grid
    }

    /// Color given to newly created cells.
    pub fn default_color(&self) -> Rgb {
        self.default_color
    }

    /// Create every missing neighbor of the frontier.
    ///
    /// Returns the addresses of the cells created, in creation order. Existing
    /// cells are never re-created or overwritten, so a frontier whose
    /// neighbors all exist yields nothing.
    pub fn expand(&mut self, frontier: &[Address]) -> Vec<Address> {
        let mut created = Vec::new();
        for addr in frontier {
            for neighbor in addr.neighbors() {
                if self.cells.contains_key(&neighbor) {
                    trace!(%neighbor, "already exists, not creating");
                    continue;
                }
                self.cells
                    .insert(neighbor, Cell::new(neighbor, self.default_color));
                created.push(neighbor);
            }
        }
        created
    }

    /// Expand `rings` times, feeding each ring's new cells back in as the
    /// next frontier. Returns the total number of cells created.
    pub fn grow(&mut self, frontier: &[Address], rings: u32) -> usize {
        let mut frontier = frontier.to_vec();
        let mut total = 0;
        for ring in 1..=rings {
            frontier = self.expand(&frontier);
            debug!(ring, created = frontier.len(), total = self.len(), "expanded ring");
            total += frontier.len();
            if frontier.is_empty() {
                break;
            }
        }
        total
    }

    /// Make sure every cell within `radius` rings of the origin exists.
    ///
    /// Rings are walked over the lattice itself rather than over the grid's
    /// existing cells, so this works on a grid of any shape. Returns the
    /// number of cells created.
    pub fn fill_radius(&mut self, radius: u32) -> usize {
        let mut seen = BTreeSet::from([Address::ORIGIN]);
        let mut ring = vec![Address::ORIGIN];
        let mut created = 0;
        for _ in 0..radius {
            let mut next = Vec::new();
            for addr in &ring {
                for neighbor in addr.neighbors() {
                    if !seen.insert(neighbor) {
                        continue;
                    }
                    next.push(neighbor);
                    if !self.cells.contains_key(&neighbor) {
                        self.cells
                            .insert(neighbor, Cell::new(neighbor, self.default_color));
                        created += 1;
                    }
                }
            }
            ring = next;
        }
        debug!(radius, created, total = self.len(), "filled radius");
        created
    }

    pub fn get(&self, addr: &Address) -> Option<&Cell> {
        self.cells.get(addr)
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.cells.contains_key(addr)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in ascending address order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// All addresses in ascending order.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.cells.keys().copied()
    }

    pub fn locked_count(&self) -> usize {
        self.cells().filter(|c| c.is_locked()).count()
    }

    pub fn initialized_count(&self) -> usize {
        self.cells().filter(|c| c.is_initialized()).count()
    }

    /// Neighbors of `addr` that exist in the grid.
    pub fn present_neighbors(&self, addr: Address) -> Vec<Address> {
        addr.neighbors()
            .into_iter()
            .filter(|n| self.contains(n))
            .collect()
    }

    /// Neighbors of `addr` that exist and are initialized.
    pub fn initialized_neighbors(&self, addr: Address) -> Vec<Address> {
        addr.neighbors()
            .into_iter()
            .filter(|n| self.get(n).is_some_and(Cell::is_initialized))
            .collect()
    }

    /// Flip the lock on a cell; returns the new lock state.
    pub fn toggle_lock(&mut self, addr: Address) -> Result<bool> {
        Ok(self.cell_mut(addr)?.toggle_lock())
    }

    pub fn lock(&mut self, addr: Address) -> Result<()> {
        self.cell_mut(addr)?.lock();
        Ok(())
    }

    pub fn unlock(&mut self, addr: Address) -> Result<()> {
        self.cell_mut(addr)?.unlock();
        Ok(())
    }

    /// User recolor: sets the color and locks and initializes the cell.
    pub fn set_color(&mut self, addr: Address, color: Rgb) -> Result<()> {
        self.cell_mut(addr)?.set_color(color);
        Ok(())
    }

    pub(crate) fn cell_mut(&mut self, addr: Address) -> Result<&mut Cell> {
        self.cells.get_mut(&addr).ok_or(Error::UnknownAddress(addr))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}
