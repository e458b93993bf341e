//! Per-address cell state.

use hexbloom_lattice::{Address, Rgb};

/// A single hex cell.
///
/// A locked cell is a diffusion source: the diffusion engine never changes
/// its color. An initialized cell has received a color either from the user
/// or from diffusion, and is what neighbors blend from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    address: Address,
    color: Rgb,
    locked: bool,
    initialized: bool,
}

impl Cell {
    /// A fresh cell: unlocked, uninitialized, painted `color`.
    pub const fn new(address: Address, color: Rgb) -> Self {
        Self {
            address,
            color,
            locked: false,
            initialized: false,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Flip the lock. Color and initialization are untouched.
    ///
    /// Returns the new lock state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Explicit user recolor: sets the color and, in the same step, locks
    /// and initializes the cell.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.locked = true;
        self.initialized = true;
    }

    /// Write a diffused color. Returns `(changed, newly_initialized)`.
    pub(crate) fn absorb(&mut self, color: Rgb) -> (bool, bool) {
        let changed = self.color != color;
        if changed {
            self.color = color;
        }
        let newly_initialized = !self.initialized;
        self.initialized = true;
        (changed, newly_initialized)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (s, r, c) = self.address.as_triple();
        write!(
            f,
            "Cell({}, {}, {}, color={}, locked={}, initialized={})",
            s, r, c, self.color, self.locked, self.initialized
        )
    }
}
