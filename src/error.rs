//! Error types for board validation, puzzle parsing and solver construction.

use std::io;

/// A grid that is not a valid n-puzzle configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("board is not square: {rows} rows but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("tile {value} is out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },
    #[error("tile {value} appears more than once")]
    Duplicate { value: u32 },
}

/// Failure to read a puzzle from its text form.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("missing board dimension")]
    MissingDimension,
    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("no initial board given")]
    MissingBoard,
}
