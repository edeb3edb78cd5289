//! Benchmarks for board construction and the A* solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::{Board, Solver};

/// Benchmark building a board, which computes both heuristics.
fn bench_board_new(c: &mut Criterion) {
    let grid: [[u32; 3]; 3] = [[8, 1, 3], [4, 0, 2], [7, 6, 5]];
    c.bench_function("board_new_3x3", |b| b.iter(|| Board::new(black_box(&grid))));
}

/// Benchmark generating all neighbors of an interior blank.
fn bench_neighbors(c: &mut Criterion) {
    let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
    c.bench_function("neighbors_interior", |b| {
        b.iter(|| black_box(&board).neighbors().count())
    });
}

/// Benchmark solving a 14-move 8-puzzle.
fn bench_solve_3x3(c: &mut Criterion) {
    let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
    c.bench_function("solve_3x3_14", |b| {
        b.iter(|| {
            Solver::with_rng(black_box(board.clone()), &mut StdRng::seed_from_u64(0)).moves()
        })
    });
}

/// Benchmark detecting an unsolvable 8-puzzle through its twin.
fn bench_unsolvable_3x3(c: &mut Criterion) {
    let board = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
    let mut group = c.benchmark_group("unsolvable");
    group.sample_size(10);
    group.bench_function("swapped_3x3", |b| {
        b.iter(|| Solver::with_rng(black_box(board.clone()), &mut StdRng::seed_from_u64(0)).is_solvable())
    });
    group.finish();
}

/// Benchmark a scrambled 15-puzzle.
fn bench_solve_4x4(c: &mut Criterion) {
    let board = Board::scrambled(4, 20, &mut StdRng::seed_from_u64(4));
    let mut group = c.benchmark_group("fifteen");
    group.sample_size(10);
    group.bench_function("scrambled_20", |b| {
        b.iter(|| Solver::with_rng(black_box(board.clone()), &mut StdRng::seed_from_u64(0)).moves())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_board_new,
    bench_neighbors,
    bench_solve_3x3,
    bench_unsolvable_3x3,
    bench_solve_4x4
);
criterion_main!(benches);
