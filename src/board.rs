//! Immutable n-puzzle board with cached distance heuristics.
//!
//! Tiles are stored row-major; 0 is the blank. The goal places 1..n²-1 in
//! order with the blank in the bottom-right cell.

use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::error::BoardError;

/// A single step of the blank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Neighbor generation order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One puzzle configuration.
///
/// Hamming and Manhattan distances are computed once when the board is built.
/// Equality and hashing look at the tiles only.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    hamming: usize,
    manhattan: usize,
    blank: usize,
    twin: OnceLock<Box<Board>>,
}

impl Board {
    /// Builds a board from an n-by-n grid.
    ///
    /// The grid must be a permutation of `0..n*n`; this is only checked in
    /// debug builds. Use [`Board::try_new`] for untrusted input.
    pub fn new<R: AsRef<[u32]>>(grid: &[R]) -> Self {
        let size = grid.len();
        let tiles: Vec<u32> = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::from_tiles(size, tiles)
    }

    /// Builds a board from an n-by-n grid, rejecting anything that is not a
    /// square permutation of `0..n*n`.
    pub fn try_new<R: AsRef<[u32]>>(grid: &[R]) -> Result<Self, BoardError> {
        let rows = grid.len();
        if rows == 0 {
            return Err(BoardError::Empty);
        }
        for (row, cells) in grid.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != rows {
                return Err(BoardError::NotSquare { rows, row, len });
            }
        }

        let tiles: Vec<u32> = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        validate_permutation(&tiles)?;
        Ok(Self::from_tiles(rows, tiles))
    }

    /// Builds a board from `size * size` row-major tiles.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Self {
        debug_assert_eq!(tiles.len(), size * size, "tile count must be size^2");
        debug_assert!(validate_permutation(&tiles).is_ok(), "tiles must be a permutation");

        let mut hamming = 0;
        let mut manhattan = 0;
        let mut blank = 0;

        for (idx, &value) in tiles.iter().enumerate() {
            if value == 0 {
                blank = idx;
                continue;
            }
            let (row, col) = (idx / size, idx % size);
            let goal_row = (value as usize - 1) / size;
            let goal_col = (value as usize - 1) % size;

            if (row, col) != (goal_row, goal_col) {
                hamming += 1;
            }
            manhattan += row.abs_diff(goal_row) + col.abs_diff(goal_col);
        }

        Self {
            size,
            tiles,
            hamming,
            manhattan,
            blank,
            twin: OnceLock::new(),
        }
    }

    /// The solved board of the given dimension.
    pub fn goal(size: usize) -> Self {
        let cells = size * size;
        let tiles = (1..=cells as u32)
            .map(|value| if value as usize == cells { 0 } else { value })
            .collect();
        Self::from_tiles(size, tiles)
    }

    /// A uniformly random arrangement. Half of these cannot be solved.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut tiles: Vec<u32> = (0..(size * size) as u32).collect();
        tiles.shuffle(rng);
        Self::from_tiles(size, tiles)
    }

    /// Walks the blank `steps` times from the goal, never undoing the
    /// previous move. The result is always solvable in at most `steps` moves.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        let mut last_move: Option<Move> = None;

        for _ in 0..steps {
            let mut candidates: Vec<(Move, Board)> = Move::ALL
                .into_iter()
                .filter(|&dir| last_move.map_or(true, |last| dir != last.opposite()))
                .filter_map(|dir| board.apply(dir).map(|next| (dir, next)))
                .collect();

            if candidates.is_empty() {
                break;
            }
            let (dir, next) = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            board = next;
            last_move = Some(dir);
        }

        board
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> usize {
        self.hamming
    }

    /// Sum of row and column distances of every non-blank tile to its goal cell.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0 && self.manhattan == 0
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.size.max(1))
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// The board after sliding the blank one cell, or `None` if that leaves the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = movement.as_offset();

        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.size || new_col >= self.size {
            return None;
        }

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, new_row * self.size + new_col);
        Some(Self::from_tiles(self.size, tiles))
    }

    /// Boards one blank move away, in up, down, left, right order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Move::ALL.into_iter().filter_map(move |dir| self.apply(dir))
    }

    /// This board with two non-blank tiles exchanged.
    ///
    /// The pair is picked at random on the first call and the result is kept,
    /// so every later call returns the same board.
    pub fn twin(&self) -> &Board {
        self.twin_with_rng(&mut thread_rng())
    }

    /// Like [`Board::twin`], drawing the pair from `rng` if no twin exists yet.
    pub fn twin_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> &Board {
        self.twin.get_or_init(|| Box::new(self.swap_random_pair(rng)))
    }

    fn swap_random_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let filled: Vec<usize> = (0..self.tiles.len()).filter(|&i| i != self.blank).collect();
        let mut tiles = self.tiles.clone();

        // a 1x1 board has nothing to swap and twins itself
        let picked: Vec<usize> = filled.choose_multiple(rng, 2).copied().collect();
        if let [first, second] = picked[..] {
            tiles.swap(first, second);
        }

        Self::from_tiles(self.size, tiles)
    }

    /// Decides solvability from the permutation parity alone.
    pub fn is_solvable_by_parity(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        let (blank_row, _) = self.blank();

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + blank row index) is odd
            (inversions + blank_row) % 2 == 1
        }
    }
}

fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

fn validate_permutation(tiles: &[u32]) -> Result<(), BoardError> {
    let max = tiles.len().saturating_sub(1) as u32;
    let mut seen = vec![false; tiles.len()];

    for &value in tiles {
        if value > max {
            return Err(BoardError::OutOfRange { value, max });
        }
        if std::mem::replace(&mut seen[value as usize], true) {
            return Err(BoardError::Duplicate { value });
        }
    }
    Ok(())
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        let width = (self.size * self.size).to_string().len();
        for row in self.rows() {
            for (col, val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
