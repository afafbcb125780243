// coro.rs - Generation loop with row coroutines

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use anyhow::Context;
use conway::{Cell, Grid};

const HISTORY: usize = 10;

/// Row coroutine: one row of the successor of `snapshot`.
async fn process_row(row_index: usize, snapshot: Arc<Grid>) -> (usize, Vec<Cell>) {
    let row = conway::next_row(&snapshot, row_index);
    tokio::task::yield_now().await; // Cooperative yielding
    (row_index, row)
}

/// One generation, every row spawned as its own task over the same snapshot.
pub async fn advance(snapshot: Arc<Grid>) -> anyhow::Result<Grid> {
    let (width, height) = (snapshot.width(), snapshot.height());

    let handles: Vec<_> = (0..width)
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
        .collect();

    let mut cells = vec![Cell::Dead; width * height];
    for handle in handles {
        let (row_index, completed_row) = handle.await.context("row coroutine failed")?;
        cells[row_index * height..(row_index + 1) * height].copy_from_slice(&completed_row);
    }
    Ok(Grid::from_cells(width, height, cells)?)
}

/// Remembers the hashes of the last few generations.
#[derive(Debug, Default)]
pub struct CycleDetector {
    grid_history: [u64; HISTORY],
    history_count: usize,
}

impl CycleDetector {
    pub fn hash_grid(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Record `grid`; true when it matches one of the remembered states.
    pub fn check_for_cycle(&mut self, grid: &Grid) -> bool {
        let current_hash = Self::hash_grid(grid);
        let filled = self.history_count.min(HISTORY);
        if self.grid_history[..filled].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY] = current_hash; // Circular buffer
        self.history_count += 1;
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// One tokio task per row.
    Coroutines,
    /// Plain `conway::step`.
    Sequential,
}

/// The driver-owned current state.
pub struct Simulation {
    grid: Arc<Grid>,
    generation: usize,
    mode: StepMode,
    history: CycleDetector,
    cycle_at: Option<usize>,
}

impl Simulation {
    pub fn new(grid: Grid, mode: StepMode) -> Self {
        let mut history = CycleDetector::default();
        history.check_for_cycle(&grid);
        Self {
            grid: Arc::new(grid),
            generation: 0,
            mode,
            history,
            cycle_at: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// First generation that repeated a recent state, if any.
    pub fn cycle_at(&self) -> Option<usize> {
        self.cycle_at
    }

    pub async fn update_generation(&mut self) -> anyhow::Result<()> {
        let next = match self.mode {
            StepMode::Coroutines => advance(Arc::clone(&self.grid)).await?,
            StepMode::Sequential => conway::step(&self.grid),
        };
        self.grid = Arc::new(next);
        self.generation += 1;

        if self.cycle_at.is_none() && self.history.check_for_cycle(&self.grid) {
            self.cycle_at = Some(self.generation);
            tracing::info!(
                generation = self.generation,
                population = self.grid.population(),
                "population revisited a recent state"
            );
        }
        Ok(())
    }

    /// Step until `target` generations have elapsed.
    pub async fn run_to(&mut self, target: usize) -> anyhow::Result<()> {
        while self.generation < target {
            self.update_generation().await?;
            tracing::trace!(
                generation = self.generation,
                population = self.grid.population(),
                "generation"
            );
        }
        Ok(())
    }
}
