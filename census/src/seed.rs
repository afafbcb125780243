// seed.rs - Building the starting grid: random fill, scenario gliders, stamps

use conway::{Cell, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Share of cells alive in a random start.
pub const RANDOM_DENSITY: f64 = 0.2;

/// Glider written by scenario seeds, as a full 3x3 box.
pub const SEED_GLIDER: [&str; 3] = ["..#", "#.#", ".##"];

pub struct Stamp {
    pub name: &'static str,
    /// Live cells relative to the top-left corner.
    pub cells: &'static [(usize, usize)],
}

pub const STAMPS: &[Stamp] = &[
    Stamp {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Stamp {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Stamp {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Stamp {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Stamp {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Stamp {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Stamp {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Case-insensitive stamp lookup.
pub fn find_stamp(name: &str) -> Option<&'static Stamp> {
    STAMPS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Set the stamp's live cells with its top-left corner at `(i, j)`,
/// wrapping at the edges. Other cells are left alone.
pub fn apply_stamp(grid: &mut Grid, stamp: &Stamp, i: usize, j: usize) {
    let (i, j) = (i % grid.width(), j % grid.height());
    for &(r, c) in stamp.cells {
        grid.set_wrapped((i + r) as isize, (j + c) as isize, Cell::Alive);
    }
}

/// Write the 3x3 seed glider box at `(i, j)`, dead cells included,
/// wrapping at the edges.
pub fn add_glider(grid: &mut Grid, i: usize, j: usize) {
    let (i, j) = (i % grid.width(), j % grid.height());
    for (r, row) in SEED_GLIDER.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let cell = Cell::from(ch == '#');
            grid.set_wrapped((i + r) as isize, (j + c) as isize, cell);
        }
    }
}

/// Random start with [`RANDOM_DENSITY`] alive. A fixed `seed` makes the
/// grid reproducible.
pub fn random_grid(width: usize, height: usize, seed: Option<u64>) -> conway::Result<Grid> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut grid = Grid::new(width, height)?;
    for i in 0..width {
        for j in 0..height {
            grid.set(i, j, Cell::from(rng.random_bool(RANDOM_DENSITY)));
        }
    }
    Ok(grid)
}
