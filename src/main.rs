use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::render::{self, Style};
use npuzzle::{input, Board, Solver};

/// Solves sliding-tile puzzles with A* and reports unsolvable boards.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle read from FILE, or stdin when omitted.
    Solve {
        file: Option<PathBuf>,
        /// Seed for choosing the twin board.
        #[arg(long)]
        seed: Option<u64>,
        /// Highlight the blank and the last moved tile.
        #[arg(long)]
        color: bool,
    },
    /// Print a random puzzle in the input format.
    Generate {
        #[arg(short, long, default_value_t = 3)]
        size: usize,
        /// Scramble with this many random moves; a full shuffle otherwise.
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the heuristics and parity verdict for a puzzle.
    Check { file: Option<PathBuf> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(level_filter(cli.verbose))
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Solve { file, seed, color } => {
            let board = load_board(file.as_deref())?;
            run_solve(&mut stdout, board, seed, color)?;
        }
        Command::Generate { size, steps, seed } => run_generate(&mut stdout, size, steps, seed)?,
        Command::Check { file } => {
            let board = load_board(file.as_deref())?;
            run_check(&mut stdout, &board)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Maps the number of `-v` flags to a log level.
fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Reads a board from `path`, or stdin when no path is given.
fn load_board(path: Option<&Path>) -> anyhow::Result<Board> {
    let board = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            input::read_board(file)
                .with_context(|| format!("failed to read puzzle from {}", path.display()))?
        }
        None => input::read_board(io::stdin().lock()).context("failed to read puzzle from stdin")?,
    };
    info!(
        "loaded {0}x{0} board (hamming {1}, manhattan {2})",
        board.dimension(),
        board.hamming(),
        board.manhattan()
    );
    Ok(board)
}

fn run_solve<W: Write>(out: &mut W, board: Board, seed: Option<u64>, color: bool) -> anyhow::Result<()> {
    let solver = Solver::with_rng(board, &mut rng_from(seed));
    info!("expanded {} nodes", solver.expanded());

    let style = if color { Style::Color } else { Style::Plain };
    render::write_solution(out, &solver, style)?;
    Ok(())
}

fn run_generate<W: Write>(
    out: &mut W,
    size: usize,
    steps: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    anyhow::ensure!(size > 0, "size must be at least 1");

    let mut rng = rng_from(seed);
    let board = match steps {
        Some(steps) => Board::scrambled(size, steps, &mut rng),
        None => Board::shuffled(size, &mut rng),
    };
    write!(out, "{}", board)?;
    Ok(())
}

fn run_check<W: Write>(out: &mut W, board: &Board) -> anyhow::Result<()> {
    let (blank_row, blank_col) = board.blank();
    let verdict = if board.is_solvable_by_parity() {
        "solvable"
    } else {
        "unsolvable"
    };

    writeln!(out, "dimension: {}", board.dimension())?;
    writeln!(out, "hamming:   {}", board.hamming())?;
    writeln!(out, "manhattan: {}", board.manhattan())?;
    writeln!(out, "blank:     ({}, {})", blank_row, blank_col)?;
    writeln!(out, "parity:    {}", verdict)?;
    Ok(())
}
