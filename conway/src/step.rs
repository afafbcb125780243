// step.rs - One generation of B3/S23 on a torus

use crate::grid::{Cell, Grid};

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the 8 toroidal neighbours of `(i, j)`.
pub fn live_neighbours(grid: &Grid, i: usize, j: usize) -> usize {
    let (i, j) = (i as isize, j as isize);
    NEIGHBOURS
        .iter()
        .filter(|&&(di, dj)| grid.get_wrapped(i + di, j + dj).is_alive())
        .count()
}

/// The rule itself.
#[inline]
pub fn next_state(cell: Cell, count: usize) -> Cell {
    match (cell, count) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}

/// Row `i` of the successor of `grid`.
pub fn next_row(grid: &Grid, i: usize) -> Vec<Cell> {
    (0..grid.height())
        .map(|j| next_state(grid.get(i, j), live_neighbours(grid, i, j)))
        .collect()
}

/// Successor generation. Every cell is computed from the same snapshot;
/// `grid` is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let cells = (0..grid.width()).flat_map(|i| next_row(grid, i)).collect();
    grid.with_cells(cells)
}

/// Advance `generations` times.
pub fn run(grid: &Grid, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |g, _| step(&g))
}
