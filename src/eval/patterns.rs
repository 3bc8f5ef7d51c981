//! Shape table for Gobang evaluation
//!
//! Each entry pairs a score with a run of 5 or 6 consecutive cells along one
//! line, classified relative to the side being scored. The table is fixed;
//! the scanner in [`super::heuristic`] slides it over every stone.

/// Classification of one cell relative to the side being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Own,
    Foe,
}

/// A recognizable stone formation with its heuristic value.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub score: i64,
    pub cells: &'static [Cell],
}

/// Score tiers for the formations below.
pub struct ShapeScore;

impl ShapeScore {
    /// Two with room on both sides
    pub const LIVE_TWO: i64 = 50;
    /// Three with a gap in the run
    pub const BROKEN_THREE: i64 = 200;
    /// Three blocked on one side
    pub const SLEEP_THREE: i64 = 500;
    /// Three open on both sides (becomes a four if unanswered)
    pub const LIVE_THREE: i64 = 5_000;
    /// Four with exactly one way to complete
    pub const RUSH_FOUR: i64 = 5_000;
    /// Four open on both sides (cannot be blocked)
    pub const LIVE_FOUR: i64 = 50_000;
    /// Five in a row
    pub const FIVE: i64 = 99_999_999;
}

use Cell::{Empty as E, Own as O};

/// Formations recognized by the evaluator.
///
/// Entries are checked in table order; the highest score wins and the first
/// entry of a tied score wins the tie. 5-cell shapes match the first five
/// cells of the scan window, 6-cell shapes the whole window.
pub const SHAPE_TABLE: [Shape; 15] = [
    Shape { score: ShapeScore::LIVE_TWO, cells: &[E, O, O, E, E] },
    Shape { score: ShapeScore::LIVE_TWO, cells: &[E, E, O, O, E] },
    Shape { score: ShapeScore::BROKEN_THREE, cells: &[O, O, E, O, E] },
    Shape { score: ShapeScore::SLEEP_THREE, cells: &[E, E, O, O, O] },
    Shape { score: ShapeScore::SLEEP_THREE, cells: &[O, O, O, E, E] },
    Shape { score: ShapeScore::LIVE_THREE, cells: &[E, O, O, O, E] },
    Shape { score: ShapeScore::LIVE_THREE, cells: &[E, O, E, O, O, E] },
    Shape { score: ShapeScore::LIVE_THREE, cells: &[E, O, O, E, O, E] },
    Shape { score: ShapeScore::RUSH_FOUR, cells: &[O, O, O, E, O] },
    Shape { score: ShapeScore::RUSH_FOUR, cells: &[O, O, E, O, O] },
    Shape { score: ShapeScore::RUSH_FOUR, cells: &[O, E, O, O, O] },
    Shape { score: ShapeScore::RUSH_FOUR, cells: &[O, O, O, O, E] },
    Shape { score: ShapeScore::RUSH_FOUR, cells: &[E, O, O, O, O] },
    Shape { score: ShapeScore::LIVE_FOUR, cells: &[E, O, O, O, O, E] },
    Shape { score: ShapeScore::FIVE, cells: &[O, O, O, O, O] },
];
