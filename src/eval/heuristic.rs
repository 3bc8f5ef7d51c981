//! Heuristic evaluation function for Gobang positions
//!
//! For every stone of the scored side the evaluator scans four line
//! directions, slides a 6-cell window over each, and keeps the strongest
//! shape-table match through that stone. Overlapping matches along the same
//! line are counted once, and two strong shapes that physically intersect
//! earn a cross bonus on top of their own scores.

use std::collections::HashSet;

use crate::board::Coord;

use super::patterns::{Cell, SHAPE_TABLE};

/// Direction vectors for line scanning, as (dc, dr) pairs.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal
    (-1, 1), // Anti-diagonal
];

/// Cells in a scan window.
const WINDOW: usize = 6;

/// Cells covered by a recorded match.
const SPAN: usize = 5;

/// Shapes at this score or below never compound into a cross bonus.
const CROSS_FLOOR: i64 = 10;

/// A shape match recorded during one evaluation pass, kept for overlap
/// deduplication and cross-bonus checks.
struct ShapeMatch {
    score: i64,
    cells: [Coord; SPAN],
    dir: (i32, i32),
}

/// Position evaluator with a configurable attack ratio.
///
/// The ratio scales only the opposing side's contribution to the final
/// value: above 1.0 the engine discounts its opponent less and plays more
/// aggressively, below 1.0 it leans defensive.
#[derive(Debug, Clone)]
pub struct Evaluator {
    attack_ratio: f64,
}

impl Evaluator {
    pub fn new(attack_ratio: f64) -> Self {
        Self { attack_ratio }
    }

    #[inline]
    pub fn attack_ratio(&self) -> f64 {
        self.attack_ratio
    }

    /// Score a position for the side owning `own`, from that side's
    /// perspective.
    ///
    /// The value is `own total - foe total * attack_ratio * 0.1`, truncated
    /// to an integer; only the foe term is scaled.
    pub fn evaluate(&self, own: &[Coord], foe: &[Coord]) -> i64 {
        let own_total = side_total(own, foe);
        let foe_total = side_total(foe, own);
        (own_total as f64 - foe_total as f64 * self.attack_ratio * 0.1) as i64
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Sum of the best shape through every (stone, direction) pair of one side,
/// plus cross bonuses. The match registry lives only for this call.
fn side_total(own_stones: &[Coord], foe_stones: &[Coord]) -> i64 {
    let own: HashSet<Coord> = own_stones.iter().copied().collect();
    let foe: HashSet<Coord> = foe_stones.iter().copied().collect();

    let mut matched: Vec<ShapeMatch> = Vec::new();
    let mut total = 0i64;
    for &stone in own_stones {
        for &dir in &DIRECTIONS {
            total += direction_score(stone, dir, &own, &foe, &mut matched);
        }
    }
    total
}

/// Best shape score through `stone` along `dir`, plus any cross bonus.
///
/// Returns 0 without scanning when the stone already lies inside a recorded
/// match of the same direction, so each line segment scores once rather than
/// once per stone on it.
fn direction_score(
    stone: Coord,
    dir: (i32, i32),
    own: &HashSet<Coord>,
    foe: &HashSet<Coord>,
    matched: &mut Vec<ShapeMatch>,
) -> i64 {
    for m in matched.iter() {
        if m.dir == dir && m.cells.contains(&stone) {
            return 0;
        }
    }

    let (dc, dr) = dir;
    let mut best_score = 0i64;
    let mut best_cells: Option<[Coord; SPAN]> = None;

    // Slide the window so the stone takes every offset within it. Cells past
    // the edge of the grid classify as empty.
    for offset in -(SPAN as i32)..=0 {
        let mut window = [Cell::Empty; WINDOW];
        for (i, cell) in window.iter_mut().enumerate() {
            let k = offset + i as i32;
            let probe = stone.offset(dc * k, dr * k);
            *cell = if foe.contains(&probe) {
                Cell::Foe
            } else if own.contains(&probe) {
                Cell::Own
            } else {
                Cell::Empty
            };
        }

        for shape in &SHAPE_TABLE {
            let hit = if shape.cells.len() == SPAN {
                shape.cells == &window[..SPAN]
            } else {
                shape.cells == &window[..]
            };
            if hit && shape.score > best_score {
                best_score = shape.score;
                let mut cells = [stone; SPAN];
                for (i, c) in cells.iter_mut().enumerate() {
                    let k = offset + i as i32;
                    *c = stone.offset(dc * k, dr * k);
                }
                best_cells = Some(cells);
            }
        }
    }

    let Some(cells) = best_cells else {
        return 0;
    };

    // Cross bonus: a strong shape sharing a cell with a previously recorded
    // strong shape compounds; both scores are added once per such pair.
    let mut bonus = 0i64;
    if best_score > CROSS_FLOOR {
        for m in matched.iter() {
            if m.score > CROSS_FLOOR && m.cells.iter().any(|c| cells.contains(c)) {
                bonus += m.score + best_score;
            }
        }
    }

    matched.push(ShapeMatch {
        score: best_score,
        cells,
        dir,
    });
    bonus + best_score
}
