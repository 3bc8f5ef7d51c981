//! Boundary toward the robot's vision and actuation processes
//!
//! The search core neither reads the camera nor drives the arm; it consumes
//! and produces coordinate lists. This module pins down that boundary: a
//! [`BoardSource`] yields the classified stone lists of the current frame, an
//! [`ArmController`] turns a chosen coordinate into a physical placement, and
//! [`GameDriver`] wires both to the searcher one turn at a time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::board::Coord;
use crate::rules::has_five_in_row;
use crate::search::Searcher;

/// The board state of one camera frame, classified into stone lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Stones placed by the machine
    #[serde(default)]
    pub machine: Vec<Coord>,
    /// Stones placed by the human opponent
    #[serde(default)]
    pub human: Vec<Coord>,
}

/// Errors surfaced at the collaborator boundary.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The vision process failed to deliver a usable snapshot
    #[error("vision error: {0}")]
    Vision(String),

    /// The arm failed to execute a placement
    #[error("actuation error: {0}")]
    Actuation(String),

    /// The search found no valid move for the current position
    #[error("no valid move for the current position")]
    NoMove,
}

/// Producer of board snapshots, typically backed by the camera pipeline.
pub trait BoardSource {
    fn capture(&mut self) -> Result<BoardSnapshot, DriverError>;
}

/// Consumer of chosen coordinates, typically backed by the arm's PWM stage.
pub trait ArmController {
    fn place_at(&mut self, coord: Coord) -> Result<(), DriverError>;
}

/// What one driver turn resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A stone was placed at the coordinate
    Played(Coord),
    /// The machine already has five in a row
    MachineWon,
    /// The human already has five in a row
    HumanWon,
}

/// One machine turn: capture, check for a decided game, search, actuate.
pub struct GameDriver<S, A> {
    source: S,
    arm: A,
    searcher: Searcher,
}

impl<S: BoardSource, A: ArmController> GameDriver<S, A> {
    pub fn new(source: S, arm: A, searcher: Searcher) -> Self {
        Self {
            source,
            arm,
            searcher,
        }
    }

    #[inline]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Play one machine turn against the freshly captured board.
    ///
    /// An empty board takes the forced opening at the grid center (the
    /// search itself cannot propose a move there, every candidate failing
    /// the adjacency filter). A full or otherwise move-less board surfaces
    /// [`DriverError::NoMove`].
    pub fn step(&mut self) -> Result<StepOutcome, DriverError> {
        let snapshot = self.source.capture()?;
        let cols = self.searcher.grid().cols();
        let rows = self.searcher.grid().rows();

        if has_five_in_row(&snapshot.machine, cols, rows) {
            return Ok(StepOutcome::MachineWon);
        }
        if has_five_in_row(&snapshot.human, cols, rows) {
            return Ok(StepOutcome::HumanWon);
        }

        let coord = if snapshot.machine.is_empty() && snapshot.human.is_empty() {
            self.searcher.grid().center()
        } else {
            self.searcher
                .get_next_move(&snapshot.machine, &snapshot.human)
                .ok_or(DriverError::NoMove)?
        };

        self.arm.place_at(coord)?;
        info!(col = coord.col, row = coord.row, "stone placed");
        Ok(StepOutcome::Played(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedSource {
        snapshots: Vec<BoardSnapshot>,
    }

    impl BoardSource for ScriptedSource {
        fn capture(&mut self) -> Result<BoardSnapshot, DriverError> {
            if self.snapshots.is_empty() {
                return Err(DriverError::Vision("no frame".into()));
            }
            Ok(self.snapshots.remove(0))
        }
    }

    #[derive(Default)]
    struct RecordingArm {
        placed: Vec<Coord>,
    }

    impl ArmController for RecordingArm {
        fn place_at(&mut self, coord: Coord) -> Result<(), DriverError> {
            self.placed.push(coord);
            Ok(())
        }
    }

    fn driver(snapshots: Vec<BoardSnapshot>) -> GameDriver<ScriptedSource, RecordingArm> {
        GameDriver::new(
            ScriptedSource { snapshots },
            RecordingArm::default(),
            Searcher::with_config(12, 12, 1, 1.0),
        )
    }

    fn line(start: Coord, dc: i32, dr: i32, len: i32) -> Vec<Coord> {
        (0..len).map(|k| start.offset(dc * k, dr * k)).collect()
    }

    #[test]
    fn test_empty_board_takes_center_opening() {
        let mut driver = driver(vec![BoardSnapshot::default()]);
        let outcome = driver.step().expect("step");
        assert_eq!(outcome, StepOutcome::Played(Coord::new(6, 6)));
        assert_eq!(driver.arm.placed, vec![Coord::new(6, 6)]);
    }

    #[test]
    fn test_step_plays_a_searched_move() {
        let snapshot = BoardSnapshot {
            machine: vec![Coord::new(6, 6)],
            human: vec![Coord::new(6, 7)],
        };
        let mut driver = driver(vec![snapshot]);

        match driver.step().expect("step") {
            StepOutcome::Played(coord) => assert_eq!(driver.arm.placed, vec![coord]),
            other => panic!("expected a placement, got {other:?}"),
        }
    }

    #[test]
    fn test_decided_game_is_reported_before_searching() {
        let snapshot = BoardSnapshot {
            machine: vec![Coord::new(0, 0)],
            human: line(Coord::new(4, 4), 1, 1, 5),
        };
        let mut driver = driver(vec![snapshot]);

        assert_eq!(driver.step().expect("step"), StepOutcome::HumanWon);
        assert!(driver.arm.placed.is_empty());
    }

    #[test]
    fn test_moveless_board_surfaces_no_move() {
        // 2x2 intersections, all occupied.
        let snapshot = BoardSnapshot {
            machine: vec![Coord::new(0, 0), Coord::new(1, 1)],
            human: vec![Coord::new(0, 1), Coord::new(1, 0)],
        };
        let mut driver = GameDriver::new(
            ScriptedSource {
                snapshots: vec![snapshot],
            },
            RecordingArm::default(),
            Searcher::with_config(1, 1, 1, 1.0),
        );

        match driver.step() {
            Err(DriverError::NoMove) => {}
            other => panic!("expected NoMove, got {other:?}"),
        }
    }

    #[test]
    fn test_vision_failure_propagates() {
        let mut driver = driver(vec![]);
        match driver.step() {
            Err(DriverError::Vision(_)) => {}
            other => panic!("expected a vision error, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot: BoardSnapshot = serde_json::from_str(
            r#"{"machine":[{"col":7,"row":7}],"human":[{"col":7,"row":8}]}"#,
        )
        .expect("parse");
        assert_eq!(snapshot.machine, vec![Coord::new(7, 7)]);
        assert_eq!(snapshot.human, vec![Coord::new(7, 8)]);

        // Missing lists default to empty.
        let empty: BoardSnapshot = serde_json::from_str("{}").expect("parse");
        assert!(empty.machine.is_empty() && empty.human.is_empty());
    }
}
