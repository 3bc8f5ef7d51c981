//! Stone bookkeeping with push/pop backtracking

use super::{Coord, Side, NEIGHBOR_OFFSETS};

/// The stones placed by each side, plus their concatenation for occupancy
/// and adjacency queries.
///
/// The two per-side sequences are disjoint and duplicate-free; the caller of
/// [`PositionSet::from_stones`] is responsible for that. During search the
/// set is mutated strictly by `push`/`pop`: every speculative placement is
/// appended and then removed again before the enclosing call returns, so the
/// contents are identical before and after each recursive step.
#[derive(Debug, Clone, Default)]
pub struct PositionSet {
    machine: Vec<Coord>,
    human: Vec<Coord>,
    occupied: Vec<Coord>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the two caller-supplied stone lists.
    pub fn from_stones(machine: &[Coord], human: &[Coord]) -> Self {
        let mut occupied = Vec::with_capacity(machine.len() + human.len());
        occupied.extend_from_slice(machine);
        occupied.extend_from_slice(human);
        Self {
            machine: machine.to_vec(),
            human: human.to_vec(),
            occupied,
        }
    }

    /// The stones of one side, in placement order.
    #[inline]
    pub fn stones(&self, side: Side) -> &[Coord] {
        match side {
            Side::Machine => &self.machine,
            Side::Human => &self.human,
        }
    }

    /// Append a speculative placement for `side`.
    #[inline]
    pub fn push(&mut self, side: Side, coord: Coord) {
        match side {
            Side::Machine => self.machine.push(coord),
            Side::Human => self.human.push(coord),
        }
        self.occupied.push(coord);
    }

    /// Undo the most recent `push` for `side`.
    #[inline]
    pub fn pop(&mut self, side: Side) {
        let undone = match side {
            Side::Machine => self.machine.pop(),
            Side::Human => self.human.pop(),
        };
        let last = self.occupied.pop();
        debug_assert_eq!(undone, last, "pop must undo the matching push");
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied.contains(&coord)
    }

    /// The most recently placed stone of either side, if any.
    #[inline]
    pub fn last_placed(&self) -> Option<Coord> {
        self.occupied.last().copied()
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.occupied.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Whether any of the 8 surrounding intersections holds a stone.
    pub fn has_neighbor(&self, coord: Coord) -> bool {
        NEIGHBOR_OFFSETS
            .iter()
            .any(|&(dc, dr)| self.is_occupied(coord.offset(dc, dr)))
    }
}
