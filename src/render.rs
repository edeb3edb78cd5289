//! Text output for solver results.

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::board::Board;
use crate::solver::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// The assignment's plain format.
    #[default]
    Plain,
    /// Terminal colors: dimmed blank, highlighted tile that just moved.
    Color,
}

/// Writes the move count and every board on the path, or a single line if
/// the board cannot be solved.
pub fn write_solution<W: Write>(out: &mut W, solver: &Solver, style: Style) -> io::Result<()> {
    let (Some(moves), Some(path)) = (solver.moves(), solver.solution()) else {
        return writeln!(out, "No solution possible");
    };

    writeln!(out, "Minimum number of moves = {}", moves)?;
    let mut previous: Option<&Board> = None;
    for board in path {
        match style {
            Style::Plain => write!(out, "{}", board)?,
            Style::Color => write_colored(out, board, previous)?,
        }
        writeln!(out)?;
        previous = Some(board);
    }
    Ok(())
}

fn write_colored<W: Write>(out: &mut W, board: &Board, previous: Option<&Board>) -> io::Result<()> {
    let size = board.dimension();
    let width = (size * size).to_string().len();
    // the tile that moved now sits where the blank used to be
    let moved = previous.map(Board::blank);

    writeln!(out, "{}", size)?;
    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                write!(out, " ")?;
            }
            let val = board.tile(row, col);
            let cell = format!("{:>width$}", val);
            if val == 0 {
                write!(out, "{}", cell.dark_grey())?;
            } else if moved == Some((row, col)) {
                write!(out, "{}", cell.yellow().bold())?;
            } else {
                write!(out, "{}", cell)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
