//! End-to-end checks on puzzle files and solver properties.

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::{input, Board, Solver};

fn load(name: &str) -> Board {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "puzzles", name].iter().collect();
    let text = fs::read_to_string(&path).expect("puzzle file exists");
    input::parse_board(&text).expect("puzzle file is valid")
}

fn assert_valid_path(initial: &Board, solver: &Solver) {
    let path = solver.solution().expect("solvable board has a path");
    let moves = solver.moves().expect("solvable board has a move count");

    assert_eq!(path.len(), moves + 1);
    assert_eq!(&path[0], initial);
    assert!(path[moves].is_goal());
    for pair in path.windows(2) {
        assert!(
            pair[0].neighbors().any(|n| n == pair[1]),
            "{} -> {} is not a single move",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_puzzle_files_solve_in_expected_moves() {
    let mut rng = StdRng::seed_from_u64(2024);
    for (name, expected) in [
        ("puzzle04.txt", 4),
        ("puzzle2x2-01.txt", 1),
        ("puzzle3x3-14.txt", 14),
        ("puzzle4x4-03.txt", 3),
    ] {
        let initial = load(name);
        let solver = Solver::with_rng(initial.clone(), &mut rng);

        assert_eq!(solver.moves(), Some(expected), "{name}");
        assert_valid_path(&initial, &solver);
    }
}

#[test]
fn test_unsolvable_file() {
    let solver = Solver::with_rng(load("puzzle3x3-unsolvable.txt"), &mut StdRng::seed_from_u64(8));
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), None);
}

#[test]
fn test_exactly_one_of_board_and_twin_is_solvable() {
    let mut rng = StdRng::seed_from_u64(31);
    let boards = [
        load("puzzle04.txt"),
        load("puzzle3x3-unsolvable.txt"),
        Board::scrambled(3, 8, &mut rng),
        Board::shuffled(2, &mut rng),
    ];

    for initial in boards {
        let twin = initial.twin_with_rng(&mut rng).clone();
        let original = Solver::with_rng(initial.clone(), &mut rng);
        let swapped = Solver::with_rng(twin, &mut rng);

        assert!(
            original.is_solvable() ^ swapped.is_solvable(),
            "exactly one of\n{initial}and its twin must be solvable"
        );
    }
}

#[test]
fn test_goal_board_solution_is_itself() {
    for size in 1..=4 {
        let goal = Board::goal(size);
        let solver = Solver::new(goal.clone());
        assert_eq!(solver.moves(), Some(0));
        assert_eq!(solver.solution(), Some(std::slice::from_ref(&goal)));
    }
}

#[test]
fn test_scrambled_boards_solve_within_their_step_count() {
    let mut rng = StdRng::seed_from_u64(5);
    for steps in [0, 1, 5, 12] {
        let initial = Board::scrambled(3, steps, &mut rng);
        let solver = Solver::with_rng(initial.clone(), &mut rng);

        assert!(solver.moves().is_some_and(|m| m <= steps && m % 2 == steps % 2));
        assert_valid_path(&initial, &solver);
    }
}
