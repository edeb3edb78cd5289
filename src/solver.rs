//! A* solver with twin-board solvability detection.
//!
//! Two searches run in lockstep: one from the initial board and one from its
//! twin (two tiles swapped). Exactly one of them can reach the goal, so the
//! first to get there decides whether the initial board is solvable.
//!
//! Neighbors equal to the immediate predecessor are skipped. There is no
//! visited set; earlier states may be re-queued along longer paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::error::SolverError;

/// A board reached after `moves` steps, linked to the node it came from.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    predecessor: Option<usize>,
}

/// Heap entry for a queued node.
///
/// Ordered so that `BinaryHeap` pops the lowest priority first, preferring
/// the smaller Manhattan distance on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: usize,
    manhattan: usize,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.manhattan.cmp(&self.manhattan))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One A* search: a node arena plus the frontier of unexpanded handles.
#[derive(Debug)]
struct Search {
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
        };
        search.push(root, 0, None);
        search
    }

    fn push(&mut self, board: Board, moves: usize, predecessor: Option<usize>) {
        let node = self.nodes.len();
        let manhattan = board.manhattan();
        self.frontier.push(FrontierEntry {
            priority: moves + manhattan,
            manhattan,
            node,
        });
        self.nodes.push(SearchNode {
            board,
            moves,
            predecessor,
        });
    }

    fn pop(&mut self) -> Option<usize> {
        self.frontier.pop().map(|entry| entry.node)
    }

    fn is_goal(&self, node: usize) -> bool {
        self.nodes[node].board.is_goal()
    }

    /// Queues every neighbor of `node` except the board it was reached from.
    fn expand(&mut self, node: usize) {
        let current = &self.nodes[node];
        let previous = current.predecessor.map(|p| &self.nodes[p].board);
        let successors: Vec<Board> = current
            .board
            .neighbors()
            .filter(|neighbor| previous != Some(neighbor))
            .collect();
        let moves = current.moves + 1;

        for board in successors {
            self.push(board, moves, Some(node));
        }
    }

    /// Boards from the root to `node`, inclusive.
    fn path_to(&self, node: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[node].moves + 1);
        let mut cursor = Some(node);
        while let Some(index) = cursor {
            let current = &self.nodes[index];
            path.push(current.board.clone());
            cursor = current.predecessor;
        }
        path.reverse();
        path
    }
}

/// Outcome of solving one board.
///
/// All work happens in the constructor; the accessors only report the result.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    expanded: usize,
}

impl Solver {
    /// Solves `initial`, using its memoized twin for the parallel search.
    pub fn new(initial: Board) -> Self {
        let twin = initial.twin().clone();
        Self::solve(initial, twin)
    }

    /// Solves `initial`, drawing its twin from `rng` if it has none yet.
    pub fn with_rng<R: Rng + ?Sized>(initial: Board, rng: &mut R) -> Self {
        let twin = initial.twin_with_rng(rng).clone();
        Self::solve(initial, twin)
    }

    fn solve(initial: Board, twin: Board) -> Self {
        let mut primary = Search::new(initial);
        let mut mirrored = Search::new(twin);
        let mut solution = None;
        let mut expanded = 0;

        while let Some(node) = primary.pop() {
            let twin_node = mirrored.pop();
            expanded += 1;

            if primary.is_goal(node) {
                solution = Some(primary.path_to(node));
                break;
            }
            if twin_node.is_some_and(|t| mirrored.is_goal(t)) {
                break;
            }

            trace!(
                "step {expanded}: frontier {} / twin frontier {}",
                primary.frontier.len(),
                mirrored.frontier.len()
            );

            primary.expand(node);
            if let Some(t) = twin_node {
                mirrored.expand(t);
            }
        }

        match &solution {
            Some(path) => debug!(
                "solved in {} moves after expanding {expanded} nodes ({} created)",
                path.len() - 1,
                primary.nodes.len()
            ),
            None => debug!(
                "twin reached the goal first after {expanded} steps; board is unsolvable"
            ),
        }

        Self { solution, expanded }
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves, or `None` if the board cannot be solved.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Nodes taken off the primary frontier.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

impl TryFrom<Option<Board>> for Solver {
    type Error = SolverError;

    fn try_from(initial: Option<Board>) -> Result<Self, Self::Error> {
        initial.map(Solver::new).ok_or(SolverError::MissingBoard)
    }
}
