//! Error types for the conway core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("cell buffer holds {actual} cells, a {width}x{height} grid needs {expected}")]
    CellCount {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("ragged rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadCell { row: usize, col: usize, ch: char },

    #[error("report sink error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
