//! Negamax search with alpha-beta pruning
//!
//! The searcher explores candidate placements depth-first, mutating one
//! shared [`PositionSet`] with push/pop backtracking. Candidates next to the
//! most recent stone are tried first, candidates with no occupied neighbor
//! are skipped entirely, and beta cutoffs abandon the remaining siblings of
//! a node (fail-hard).
//!
//! # Example
//!
//! ```
//! use gobang::board::Coord;
//! use gobang::search::Searcher;
//!
//! let mut searcher = Searcher::with_config(12, 12, 1, 1.0);
//! let machine = [Coord::new(6, 6), Coord::new(7, 7)];
//! let human = [Coord::new(6, 7)];
//!
//! if let Some(coord) = searcher.get_next_move(&machine, &human) {
//!     println!("place at {coord}");
//! }
//! ```

use tracing::debug;

use crate::board::{Coord, Grid, PositionSet, Side, NEIGHBOR_OFFSETS};
use crate::eval::{Evaluator, ShapeScore};
use crate::rules::has_five_in_row;

/// Initial alpha-beta window bound, matching the five-in-a-row score.
const INF: i64 = ShapeScore::FIVE;

/// Counters for one `get_next_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates expanded into recursive calls
    pub expanded_nodes: u64,
    /// Beta cutoffs taken (fail-high)
    pub beta_cutoffs: u64,
}

/// Depth-limited negamax searcher.
///
/// Construction fixes the grid dimensions, the search depth, and the attack
/// ratio; each [`Searcher::get_next_move`] call loads a fresh position from
/// the caller's stone lists. The searcher is not reentrant: one search runs
/// to completion before the next may start, which the `&mut self` receiver
/// enforces.
pub struct Searcher {
    grid: Grid,
    depth: u8,
    evaluator: Evaluator,
    board: PositionSet,
    best_move: Option<Coord>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with the default depth (3) and a neutral attack
    /// ratio.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self::with_config(cols, rows, 3, 1.0)
    }

    /// Create a searcher with explicit depth and attack ratio.
    ///
    /// Odd depths keep the leaf perspective aligned with the machine's move
    /// at the root. Ratios above 1.0 play more aggressively, below 1.0 more
    /// defensively.
    pub fn with_config(cols: i32, rows: i32, depth: u8, attack_ratio: f64) -> Self {
        Self {
            grid: Grid::new(cols, rows),
            depth,
            evaluator: Evaluator::new(attack_ratio),
            board: PositionSet::new(),
            best_move: None,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Choose the machine's next placement for the given position.
    ///
    /// `machine` and `human` are the previously placed stones of each side;
    /// they must be disjoint and duplicate-free, which is not validated
    /// here. Returns `None` when no candidate was expanded: an empty board
    /// (no stone to be adjacent to), a full board, or a position where
    /// either side already has five in a row. Callers decide the fallback
    /// for those cases.
    pub fn get_next_move(&mut self, machine: &[Coord], human: &[Coord]) -> Option<Coord> {
        self.board = PositionSet::from_stones(machine, human);
        self.stats = SearchStats::default();
        self.best_move = None;

        let value = self.negamax(Side::Machine, self.depth, -INF, INF);
        debug!(
            value,
            expanded = self.stats.expanded_nodes,
            cutoffs = self.stats.beta_cutoffs,
            "search finished"
        );
        self.best_move
    }

    /// Statistics for the most recent `get_next_move` call.
    #[inline]
    pub fn statistics(&self) -> SearchStats {
        self.stats
    }

    /// Recursive negamax step. Returns the score of the position from the
    /// perspective of `to_move`; the board is restored to its entry state
    /// before every return.
    fn negamax(&mut self, to_move: Side, depth: u8, mut alpha: i64, beta: i64) -> i64 {
        let cols = self.grid.cols();
        let rows = self.grid.rows();
        if has_five_in_row(self.board.stones(Side::Machine), cols, rows)
            || has_five_in_row(self.board.stones(Side::Human), cols, rows)
            || depth == 0
        {
            return self.leaf_value(to_move);
        }

        let mut candidates: Vec<Coord> = self
            .grid
            .positions()
            .iter()
            .copied()
            .filter(|&p| !self.board.is_occupied(p))
            .collect();
        order_moves(&mut candidates, self.board.last_placed());

        for cand in candidates {
            // Placements with no occupied neighbor cannot interact with any
            // existing line; skipping them bounds the branching factor.
            if !self.board.has_neighbor(cand) {
                continue;
            }
            self.stats.expanded_nodes += 1;

            self.board.push(to_move, cand);
            let value = -self.negamax(to_move.opponent(), depth - 1, -beta, -alpha);
            self.board.pop(to_move);

            if value > alpha {
                if depth == self.depth {
                    self.best_move = Some(cand);
                }
                if value >= beta {
                    self.stats.beta_cutoffs += 1;
                    return beta;
                }
                alpha = value;
            }
        }
        alpha
    }

    /// Heuristic value of the current position for the side to move.
    fn leaf_value(&self, to_move: Side) -> i64 {
        let own = self.board.stones(to_move);
        let foe = self.board.stones(to_move.opponent());
        self.evaluator.evaluate(own, foe)
    }
}

/// Promote the 8 neighbors of the most recently placed stone to the front
/// of the candidate list.
///
/// Promoted neighbors appear in the fixed neighborhood scan order; all other
/// candidates keep their relative order behind them. No-op before the first
/// stone is placed. Reorders only, never filters.
fn order_moves(candidates: &mut Vec<Coord>, last_placed: Option<Coord>) {
    let Some(last) = last_placed else {
        return;
    };
    let mut front = 0;
    for (dc, dr) in NEIGHBOR_OFFSETS {
        let neighbor = last.offset(dc, dr);
        if let Some(idx) = candidates.iter().position(|&c| c == neighbor) {
            let promoted = candidates.remove(idx);
            candidates.insert(front, promoted);
            front += 1;
        }
    }
}
