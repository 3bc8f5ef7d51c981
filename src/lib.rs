//! Gobang move-selection engine for a stone-placing robot
//!
//! Chooses the next placement for the automated player in a five-in-a-row
//! game on a rectangular intersection grid. The core is a depth-limited
//! negamax search with alpha-beta pruning over a shape-table positional
//! evaluator; the camera that reads the board and the arm that places the
//! stone are external collaborators reached through the [`driver`] traits.
//!
//! # Architecture
//!
//! - [`board`]: coordinates, the intersection grid, and the backtracking
//!   stone bookkeeping
//! - [`rules`]: five-in-a-row detection
//! - [`eval`]: shape table and positional evaluation
//! - [`search`]: negamax with alpha-beta pruning and per-call statistics
//! - [`driver`]: vision/arm interface boundary and the per-turn game loop
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Coord, Searcher};
//!
//! // 13x13 intersections (line indices 0..=12), depth 1, neutral ratio.
//! let mut searcher = Searcher::with_config(12, 12, 1, 1.0);
//!
//! let machine = [Coord::new(7, 7), Coord::new(8, 8), Coord::new(9, 9)];
//! let human = [Coord::new(7, 8), Coord::new(8, 7)];
//!
//! if let Some(coord) = searcher.get_next_move(&machine, &human) {
//!     let stats = searcher.statistics();
//!     println!("place at {coord} ({} nodes)", stats.expanded_nodes);
//! }
//! ```

pub mod board;
pub mod driver;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Coord, Grid, PositionSet, Side};
pub use driver::{
    ArmController, BoardSnapshot, BoardSource, DriverError, GameDriver, StepOutcome,
};
pub use eval::Evaluator;
pub use rules::has_five_in_row;
pub use search::{SearchStats, Searcher};
