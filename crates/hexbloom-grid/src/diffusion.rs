//! Synchronous color diffusion ("reflow").
//!
//! Each iteration reads the whole grid as it stood when the iteration
//! began, computes a candidate color for every unlocked cell with at least
//! one initialized neighbor, and only then writes the candidates back. No
//! read within an iteration observes a write from the same iteration.
//!
//! # Blending
//!
//! A candidate is the per-channel floor of the mean over the initialized
//! neighbors: `(255,0,0)` and `(0,255,0)` blend to `(127,127,0)`.
//!
//! # Termination
//!
//! After every apply phase, in priority order:
//!
//! 1. no color changed and no cell became initialized: fixed point;
//! 2. unbounded run with no locked and no initialized cell: nothing can
//!    ever act as a source;
//! 3. the step budget is spent;
//! 4. the grid is back in a state it already reached after an earlier
//!    iteration. Floor averaging can settle into a limit cycle instead of a
//!    fixed point, and the state space is finite, so this check bounds every
//!    run.
//!
//! An unbounded run on a source-free grid stops before the first iteration.
//! A finite budget skips that check and runs its first iteration anyway.

use std::collections::HashMap;

use hexbloom_lattice::{Address, Rgb};
use tracing::{debug, info, trace, warn};

use crate::Grid;

/// How many iterations a reflow may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepBudget {
    /// Keep iterating until the grid stops changing.
    #[default]
    Unbounded,
    /// At most this many iterations.
    Steps(u32),
}

impl StepBudget {
    /// A single iteration.
    pub const ONE: Self = StepBudget::Steps(1);

    /// Interpret a raw step count where `-1` means unbounded.
    ///
    /// Returns `None` for any other negative value.
    pub fn from_raw(steps: i64) -> Option<Self> {
        match steps {
            -1 => Some(StepBudget::Unbounded),
            n => u32::try_from(n).ok().map(StepBudget::Steps),
        }
    }

    fn is_exhausted(self, iterations: u32) -> bool {
        match self {
            StepBudget::Unbounded => false,
            StepBudget::Steps(n) => iterations >= n,
        }
    }
}

/// Why a reflow stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    /// The last iteration changed nothing.
    FixedPoint,
    /// Unbounded run with no locked and no initialized cells.
    NoSource,
    /// The step budget ran out.
    BudgetExhausted,
    /// Asked for zero steps; nothing ran.
    ZeroBudget,
    /// The grid returned to a state seen `period` iterations earlier.
    Cycle { period: u32 },
}

/// What one iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// Cells whose color value changed.
    pub changed: usize,
    /// Cells that became initialized.
    pub initialized: usize,
}

impl IterationStats {
    /// No changes and no new initializations.
    pub fn is_quiescent(&self) -> bool {
        self.changed == 0 && self.initialized == 0
    }
}

/// Outcome of a [`reflow`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflowReport {
    /// Per-iteration statistics, one entry per iteration run.
    pub steps: Vec<IterationStats>,
    pub stop: StopReason,
}

impl ReflowReport {
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    pub fn total_changed(&self) -> usize {
        self.steps.iter().map(|s| s.changed).sum()
    }

    pub fn total_initialized(&self) -> usize {
        self.steps.iter().map(|s| s.initialized).sum()
    }

    pub fn converged(&self) -> bool {
        self.stop == StopReason::FixedPoint
    }
}

/// Floor-mean of each channel. `None` when there is nothing to blend.
pub fn blend<I>(colors: I) -> Option<Rgb>
where
    I: IntoIterator<Item = Rgb>,
{
    let mut count = 0u32;
    let mut sum = [0u32; 3];
    for color in colors {
        count += 1;
        for (total, channel) in sum.iter_mut().zip(color.channels()) {
            *total += u32::from(channel);
        }
    }
    if count == 0 {
        return None;
    }
    // A mean of u8 values never exceeds u8::MAX.
    Some(Rgb::from(sum.map(|total| (total / count) as u8)))
}

/// Run one synchronous iteration.
pub fn iterate(grid: &mut Grid) -> IterationStats {
    let candidates: Vec<(Address, Rgb)> = grid
        .cells()
        .filter(|cell| !cell.is_locked())
        .filter_map(|cell| {
            let sources = grid
                .initialized_neighbors(cell.address())
                .into_iter()
                .filter_map(|n| grid.get(&n))
                .map(|n| n.color());
            let color = blend(sources)?;
            trace!(address = %cell.address(), %color, "candidate");
            Some((cell.address(), color))
        })
        .collect();

    let mut stats = IterationStats::default();
    for (addr, color) in candidates {
        let Ok(cell) = grid.cell_mut(addr) else {
            continue;
        };
        let (changed, newly_initialized) = cell.absorb(color);
        stats.changed += usize::from(changed);
        stats.initialized += usize::from(newly_initialized);
    }
    stats
}

/// Diffuse colors until a fixed point, a repeated state, or until `budget`
/// is spent.
pub fn reflow(grid: &mut Grid, budget: StepBudget) -> ReflowReport {
    let no_source = |grid: &Grid| grid.locked_count() == 0 && grid.initialized_count() == 0;
    let mut steps = Vec::new();

    if budget == StepBudget::Steps(0) {
        return finish(steps, StopReason::ZeroBudget);
    }
    if budget == StepBudget::Unbounded && no_source(grid) {
        return finish(steps, StopReason::NoSource);
    }

    let mut seen: HashMap<blake3::Hash, u32> = HashMap::new();
    let mut iterations = 0u32;
    loop {
        let stats = iterate(grid);
        iterations += 1;
        debug!(
            iteration = iterations,
            changed = stats.changed,
            initialized = stats.initialized,
            "reflow iteration"
        );
        steps.push(stats);

        if stats.is_quiescent() {
            return finish(steps, StopReason::FixedPoint);
        }
        if budget == StepBudget::Unbounded && no_source(grid) {
            return finish(steps, StopReason::NoSource);
        }
        if budget.is_exhausted(iterations) {
            return finish(steps, StopReason::BudgetExhausted);
        }
        if let Some(first) = seen.insert(state_digest(grid), iterations) {
            let period = iterations - first;
            warn!(iteration = iterations, period, "reflow entered a limit cycle");
            return finish(steps, StopReason::Cycle { period });
        }
    }
}

/// Digest of everything diffusion can change: color and initialization of
/// every cell, in address order.
fn state_digest(grid: &Grid) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for cell in grid.cells() {
        let [r, g, b] = cell.color().channels();
        hasher.update(&[r, g, b, u8::from(cell.is_initialized())]);
    }
    hasher.finalize()
}

fn finish(steps: Vec<IterationStats>, stop: StopReason) -> ReflowReport {
    let report = ReflowReport { steps, stop };
    info!(
        iterations = report.iterations(),
        changed = report.total_changed(),
        initialized = report.total_initialized(),
        stop = ?report.stop,
        "reflow finished"
    );
    report
}
