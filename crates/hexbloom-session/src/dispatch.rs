//! Mapping from renderer-side ids back to cell addresses.
//!
//! The renderer assigns its own ids to drawn cells. A table is rebuilt on
//! every redraw and handed back with each event, so the core never holds
//! renderer state.

use std::collections::BTreeMap;

use hexbloom_lattice::{Address, Rgb};

use crate::GridSnapshot;

/// What the user asked to do to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Hover,
    ToggleLock,
    SetColor(Rgb),
}

/// Render id to address lookup for one redraw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTable {
    ids: BTreeMap<u64, Address>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number cells sequentially from 1 in snapshot order.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Self {
        snapshot
            .cells
            .iter()
            .zip(1u64..)
            .map(|(cell, id)| (id, cell.address()))
            .collect()
    }

    pub fn insert(&mut self, id: u64, addr: Address) -> Option<Address> {
        self.ids.insert(id, addr)
    }

    pub fn resolve(&self, id: u64) -> Option<Address> {
        self.ids.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<(u64, Address)> for DispatchTable {
    fn from_iter<I: IntoIterator<Item = (u64, Address)>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexbloom_grid::Grid;
    use hexbloom_lattice::Sublattice;

    #[test]
    fn ids_follow_address_order() {
        let grid = Grid::with_radius(1, Rgb::WHITE);
        let table = DispatchTable::from_snapshot(&GridSnapshot::capture(&grid));

        assert_eq!(table.len(), 7);
        assert_eq!(table.resolve(0), None);
        assert_eq!(table.resolve(8), None);
        let addrs: Vec<_> = (1..=7).filter_map(|id| table.resolve(id)).collect();
        assert!(addrs.iter().eq(grid.addresses().collect::<Vec<_>>().iter()));
    }

    #[test]
    fn custom_ids() {
        let mut table = DispatchTable::new();
        let addr = Address::new(Sublattice::Shifted, 0, 0);
        assert_eq!(table.insert(42, addr), None);
        assert_eq!(table.resolve(42), Some(addr));
        assert_eq!(table.insert(42, Address::ORIGIN), Some(addr));
    }
}
