use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Machine.opponent(), Side::Human);
    assert_eq!(Side::Human.opponent(), Side::Machine);
}

#[test]
fn test_coord_offset() {
    let c = Coord::new(6, 6);
    assert_eq!(c.offset(1, -1), Coord::new(7, 5));
    assert_eq!(c.offset(0, 0), c);
}

#[test]
fn test_grid_is_inclusive_of_both_bounds() {
    // A "12x12" board has lines 0..=12 on each axis: 13x13 intersections.
    let grid = Grid::new(12, 12);
    assert_eq!(grid.positions().len(), 13 * 13);
    assert!(grid.positions().contains(&Coord::new(0, 0)));
    assert!(grid.positions().contains(&Coord::new(12, 12)));
    assert!(!grid.positions().contains(&Coord::new(13, 0)));
}

#[test]
fn test_grid_enumeration_order_is_stable() {
    let grid = Grid::new(2, 2);
    assert_eq!(grid.positions()[0], Coord::new(0, 0));
    assert_eq!(grid.positions()[1], Coord::new(0, 1));
    assert_eq!(grid.positions()[3], Coord::new(1, 0));
}

#[test]
fn test_grid_center() {
    assert_eq!(Grid::new(12, 12).center(), Coord::new(6, 6));
    assert_eq!(Grid::new(14, 14).center(), Coord::new(7, 7));
}

#[test]
fn test_position_set_from_stones() {
    let machine = [Coord::new(7, 7), Coord::new(8, 8)];
    let human = [Coord::new(7, 8)];
    let set = PositionSet::from_stones(&machine, &human);

    assert_eq!(set.stones(Side::Machine), &machine);
    assert_eq!(set.stones(Side::Human), &human);
    assert_eq!(set.stone_count(), 3);
    assert!(set.is_occupied(Coord::new(7, 7)));
    assert!(set.is_occupied(Coord::new(7, 8)));
    assert!(!set.is_occupied(Coord::new(0, 0)));
}

#[test]
fn test_last_placed_is_tail_of_combined_sequence() {
    let machine = [Coord::new(7, 7)];
    let human = [Coord::new(7, 8)];
    let set = PositionSet::from_stones(&machine, &human);
    // Combined order is machine stones then human stones.
    assert_eq!(set.last_placed(), Some(Coord::new(7, 8)));

    assert_eq!(PositionSet::new().last_placed(), None);
}

#[test]
fn test_push_pop_restores_contents() {
    let machine = [Coord::new(7, 7)];
    let human = [Coord::new(7, 8)];
    let mut set = PositionSet::from_stones(&machine, &human);

    set.push(Side::Machine, Coord::new(9, 9));
    assert!(set.is_occupied(Coord::new(9, 9)));
    assert_eq!(set.last_placed(), Some(Coord::new(9, 9)));
    assert_eq!(set.stones(Side::Machine).len(), 2);

    set.pop(Side::Machine);
    assert!(!set.is_occupied(Coord::new(9, 9)));
    assert_eq!(set.stones(Side::Machine), &machine);
    assert_eq!(set.stones(Side::Human), &human);
    assert_eq!(set.last_placed(), Some(Coord::new(7, 8)));
}

#[test]
fn test_has_neighbor() {
    let set = PositionSet::from_stones(&[Coord::new(5, 5)], &[]);

    // All 8 surrounding intersections see the stone.
    for (dc, dr) in NEIGHBOR_OFFSETS {
        assert!(set.has_neighbor(Coord::new(5 + dc, 5 + dr)));
    }
    // Two steps away is not adjacent.
    assert!(!set.has_neighbor(Coord::new(7, 5)));
    assert!(!set.has_neighbor(Coord::new(5, 7)));

    assert!(!PositionSet::new().has_neighbor(Coord::new(5, 5)));
}
