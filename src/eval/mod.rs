//! Positional evaluation for Gobang
//!
//! Pattern recognition and scoring for board positions:
//! - a fixed shape table mapping stone formations to scores
//! - a directional scanner that finds the strongest shape through each stone
//! - a cross bonus for independently strong shapes that intersect

pub mod heuristic;
pub mod patterns;

pub use heuristic::Evaluator;
pub use patterns::{Cell, Shape, ShapeScore, SHAPE_TABLE};
