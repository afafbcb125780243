// grid.rs - Grid types for the toroidal Game of Life
//
// The first index `i` runs over `0..width`, the second index `j` over
// `0..height`. Cells are stored row-major: row `i` is `height` cells long.

use std::fmt;

use crate::error::{Error, Result};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// `#` is alive, `.` is dead.
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '#' => Some(Cell::Alive),
            '.' => Some(Cell::Dead),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Dense `width x height` cell array. Dimensions never change after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = Self::cell_count(width, height)?;
        Self::from_cells(width, height, vec![Cell::Dead; count])
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = Self::cell_count(width, height)?;
        if cells.len() != expected {
            return Err(Error::CellCount {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Number of cells in a `width x height` grid, if such a grid can exist.
    fn cell_count(width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })
    }

    /// Parse `#`/`.` text, one string per row. Every row must have the same
    /// length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.len();
        let height = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * height);

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let actual = text.chars().count();
            if actual != height {
                return Err(Error::RaggedRows { row, expected: height, actual });
            }
            for (col, ch) in text.chars().enumerate() {
                cells.push(Cell::from_char(ch).ok_or(Error::BadCell { row, col, ch })?);
            }
        }
        Self::from_cells(width, height, cells)
    }

    /// Same dimensions, new contents. Used by the stepper, which always
    /// produces exactly `width * height` cells.
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Grid {
        debug_assert_eq!(cells.len(), self.cells.len());
        Grid { width: self.width, height: self.height, cells }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics if `(i, j)` is outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Cell {
        assert!(i < self.width && j < self.height, "cell ({i}, {j}) outside {}x{} grid", self.width, self.height);
        self.cells[i * self.height + j]
    }

    /// Panics if `(i, j)` is outside the grid.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, cell: Cell) {
        assert!(i < self.width && j < self.height, "cell ({i}, {j}) outside {}x{} grid", self.width, self.height);
        self.cells[i * self.height + j] = cell;
    }

    /// Toroidal lookup: any signed coordinate wraps onto the grid.
    #[inline]
    pub fn get_wrapped(&self, i: isize, j: isize) -> Cell {
        let (i, j) = self.wrap(i, j);
        self.cells[i * self.height + j]
    }

    #[inline]
    pub fn set_wrapped(&mut self, i: isize, j: isize, cell: Cell) {
        let (i, j) = self.wrap(i, j);
        self.cells[i * self.height + j] = cell;
    }

    fn wrap(&self, i: isize, j: isize) -> (usize, usize) {
        (
            i.rem_euclid(self.width as isize) as usize,
            j.rem_euclid(self.height as isize) as usize,
        )
    }

    pub fn row(&self, i: usize) -> &[Cell] {
        &self.cells[i * self.height..(i + 1) * self.height]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.height)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Toroidal translation: the cell at `(i, j)` moves to
    /// `(i + di, j + dj)`, wrapping at the edges.
    pub fn shifted(&self, di: isize, dj: isize) -> Grid {
        let mut out = self.clone();
        for i in 0..self.width {
            for j in 0..self.height {
                out.set_wrapped(i as isize + di, j as isize + dj, self.get(i, j));
            }
        }
        out
    }

    /// Quarter turn counter-clockwise. A `w x h` grid becomes `h x w`.
    pub fn rotated(&self) -> Grid {
        let (w, h) = (self.height, self.width);
        let mut cells = Vec::with_capacity(w * h);
        for r in 0..w {
            for c in 0..h {
                cells.push(self.get(c, self.height - 1 - r));
            }
        }
        Grid { width: w, height: h, cells }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(Grid::new(0, 4), Err(Error::EmptyGrid { .. })));
        assert!(matches!(Grid::new(4, 0), Err(Error::EmptyGrid { .. })));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(1 << 32, 1 << 32),
            Err(Error::TooLarge { .. })
        ));
        assert!(matches!(
            Grid::from_cells(usize::MAX, 2, Vec::new()),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn cell_buffer_must_match_dimensions() {
        let err = Grid::from_cells(2, 3, vec![Cell::Dead; 5]).unwrap_err();
        assert!(matches!(err, Error::CellCount { expected: 6, actual: 5, .. }));
    }

    #[test]
    fn from_rows_parses_text() {
        let g = Grid::from_rows(&[".#.", "##."]).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 3);
        assert_eq!(g.get(0, 1), Cell::Alive);
        assert_eq!(g.get(1, 2), Cell::Dead);
        assert_eq!(g.population(), 3);
        assert_eq!(g.to_string(), ".#.\n##.\n");
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(matches!(
            Grid::from_rows(&["..", "..."]),
            Err(Error::RaggedRows { row: 1, expected: 2, actual: 3 })
        ));
        assert!(matches!(
            Grid::from_rows(&[".x"]),
            Err(Error::BadCell { row: 0, col: 1, ch: 'x' })
        ));
    }

    #[test]
    fn wrapped_access_folds_onto_torus() {
        let mut g = Grid::new(3, 4).unwrap();
        g.set_wrapped(-1, 5, Cell::Alive);
        assert_eq!(g.get(2, 1), Cell::Alive);
        assert_eq!(g.get_wrapped(5, -3), Cell::Alive);
    }

    #[test]
    fn shifted_wraps_cells() {
        let g = Grid::from_rows(&["#..", "...", "..."]).unwrap();
        let s = g.shifted(-1, 4);
        assert_eq!(s.get(2, 1), Cell::Alive);
        assert_eq!(s.population(), 1);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let g = Grid::from_rows(&["##.", "..."]).unwrap();
        let r = g.rotated();
        assert_eq!(r.to_string(), "..\n#.\n#.\n");
        assert_eq!(r.rotated().rotated().rotated(), g);
    }
}
