//! The interaction façade: one call per user intent.

use hexbloom_grid::{reflow, Cell, Grid, ReflowReport, StepBudget};
use hexbloom_lattice::{Address, Rgb};
use tracing::{debug, info};

use crate::{DispatchTable, Error, GridObserver, GridSnapshot, Intent, Result, SessionConfig};

/// Owns a grid and turns user intents into grid and diffusion calls.
///
/// Observers receive the full cell set after every mutating call.
pub struct Session {
    grid: Grid,
    config: SessionConfig,
    observers: Vec<Box<dyn GridObserver>>,
}

impl Session {
    /// Build a grid of `config.radius` rings around the origin.
    pub fn new(config: SessionConfig) -> Self {
        let grid = Grid::with_radius(config.radius, config.default_color);
        info!(radius = config.radius, cells = grid.len(), "session started");
        Self {
            grid,
            config,
            observers: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) {
        self.observers.push(observer);
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid)
    }

    /// A dispatch table for the current cell set.
    pub fn dispatch_table(&self) -> DispatchTable {
        DispatchTable::from_snapshot(&self.snapshot())
    }

    /// Read-only lookup for hover info.
    pub fn hover(&self, addr: Address) -> Result<Cell> {
        self.grid
            .get(&addr)
            .cloned()
            .ok_or(Error::Grid(hexbloom_grid::Error::UnknownAddress(addr)))
    }

    /// Grow the grid so every cell within `radius` rings exists.
    pub fn expand_to(&mut self, radius: u32) -> usize {
        let created = self.grid.fill_radius(radius);
        if created > 0 {
            self.notify_changed();
        }
        created
    }

    pub fn toggle_lock(&mut self, addr: Address) -> Result<Cell> {
        let locked = self.grid.toggle_lock(addr)?;
        debug!(%addr, locked, "toggled lock");
        self.notify_changed();
        self.hover(addr)
    }

    /// Recolor a cell, which also locks and initializes it.
    pub fn set_color(&mut self, addr: Address, color: Rgb) -> Result<Cell> {
        self.grid.set_color(addr, color)?;
        debug!(%addr, %color, "recolored");
        self.notify_changed();
        self.hover(addr)
    }

    /// Recolor from a `#rrggbb` string, as color pickers return.
    pub fn set_color_hex(&mut self, addr: Address, color: &str) -> Result<Cell> {
        let color = Rgb::from_hex_str(color)?;
        self.set_color(addr, color)
    }

    pub fn reflow(&mut self, budget: StepBudget) -> ReflowReport {
        let report = reflow(&mut self.grid, budget);
        if !report.steps.is_empty() {
            self.notify_changed();
        }
        for observer in &mut self.observers {
            observer.on_reflow_finished(&report);
        }
        report
    }

    pub fn reflow_to_convergence(&mut self) -> ReflowReport {
        self.reflow(StepBudget::Unbounded)
    }

    pub fn reflow_step(&mut self) -> ReflowReport {
        self.reflow(StepBudget::ONE)
    }

    /// Reflow with the configured budget.
    pub fn reflow_default(&mut self) -> ReflowReport {
        self.reflow(self.config.reflow_mode)
    }

    /// Route a renderer event through `table` to the matching intent.
    pub fn dispatch(&mut self, table: &DispatchTable, id: u64, intent: Intent) -> Result<Cell> {
        let addr = table.resolve(id).ok_or(Error::UnknownRenderId(id))?;
        match intent {
            Intent::Hover => self.hover(addr),
            Intent::ToggleLock => self.toggle_lock(addr),
            Intent::SetColor(color) => self.set_color(addr, color),
        }
    }

    fn notify_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_grid_changed(&snapshot);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
