//! Sliding-tile puzzle solver.
//!
//! Finds shortest solutions to n-by-n sliding puzzles with A* over the
//! Manhattan distance, and detects unsolvable boards by searching a twin
//! board (two tiles swapped) in lockstep.

pub mod board;
pub mod error;
pub mod input;
pub mod render;
pub mod solver;

pub use board::{Board, Move};
pub use error::{BoardError, ParseError, SolverError};
pub use solver::Solver;
