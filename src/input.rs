//! Reads puzzles in the plain text layout: the dimension `n` followed by
//! `n * n` tiles in row-major order, all whitespace separated.
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```

use std::io::Read;

use crate::board::Board;
use crate::error::ParseError;

/// Parses a board from its text form, validating the tiles.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut tokens = text.split_whitespace().map(parse_number);

    let size = tokens.next().ok_or(ParseError::MissingDimension)?? as usize;
    let tiles = tokens.collect::<Result<Vec<u32>, _>>()?;

    let expected = size * size;
    if tiles.len() != expected {
        return Err(ParseError::TileCount {
            expected,
            found: tiles.len(),
        });
    }

    let grid: Vec<&[u32]> = tiles.chunks(size.max(1)).collect();
    Ok(Board::try_new(&grid)?)
}

/// Reads everything from `reader` and parses it as a board.
pub fn read_board<R: Read>(mut reader: R) -> Result<Board, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_board(&text)
}

fn parse_number(token: &str) -> Result<u32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}
