//! Redraw snapshots and the events pushed to the renderer.

use std::sync::mpsc::Sender;

use hexbloom_grid::{Cell, Grid, ReflowReport};
use serde::{Deserialize, Serialize};

/// The full cell set, in address order, for a redraw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub cells: Vec<Cell>,
    pub locked_count: usize,
    pub initialized_count: usize,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid) -> Self {
        let cells: Vec<_> = grid.cells().cloned().collect();
        let locked_count = cells.iter().filter(|c| c.is_locked()).count();
        let initialized_count = cells.iter().filter(|c| c.is_initialized()).count();
        Self {
            cells,
            locked_count,
            initialized_count,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Events emitted by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GridEvent {
    /// Some cell changed; redraw everything.
    GridChanged { snapshot: GridSnapshot },

    /// A reflow call returned.
    ReflowFinished { report: ReflowReport },
}

/// Receives session events. Implemented by the renderer.
pub trait GridObserver {
    /// Called after every mutating operation.
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot);

    fn on_reflow_finished(&mut self, _report: &ReflowReport) {}
}

/// Forward events over a channel. A dropped receiver is ignored.
impl GridObserver for Sender<GridEvent> {
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot) {
        let _ = self.send(GridEvent::GridChanged {
            snapshot: snapshot.clone(),
        });
    }

    fn on_reflow_finished(&mut self, report: &ReflowReport) {
        let _ = self.send(GridEvent::ReflowFinished {
            report: report.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexbloom_lattice::{Address, Rgb};

    #[test]
    fn snapshot_counts() {
        let mut grid = Grid::with_radius(1, Rgb::WHITE);
        grid.set_color(Address::ORIGIN, Rgb::BLACK).unwrap();

        let snap = GridSnapshot::capture(&grid);
        assert_eq!(snap.len(), 7);
        assert_eq!(snap.locked_count, 1);
        assert_eq!(snap.initialized_count, 1);
        assert!(snap.cells.windows(2).all(|w| w[0].address() < w[1].address()));
        assert!(snap.cells.iter().any(|c| c.address() == Address::ORIGIN && c.is_locked()));
    }

    #[test]
    fn event_serialization() {
        let grid = Grid::default();
        let event = GridEvent::GridChanged {
            snapshot: GridSnapshot::capture(&grid),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"GridChanged""#));
        assert!(json.contains("#ffffff"));

        let parsed: GridEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn snapshot_default() {
        let snap = GridSnapshot::default();
        assert!(snap.is_empty());
        assert_eq!(snap.locked_count, 0);
    }
}
