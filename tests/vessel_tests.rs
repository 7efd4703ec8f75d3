use battleship_rules::{
    AttackResult, Coordinate, Direction, RulesError, Vessel, VesselState, BOARD_SIZE,
};

fn at(row: i32, column: i32) -> Coordinate {
    Coordinate::new(row, column).unwrap()
}

fn vessel(row: i32, column: i32, direction: Direction, length: usize) -> Vessel {
    Vessel::new(at(row, column), direction, length).unwrap()
}

#[test]
fn test_invalid_sizes() {
    assert_eq!(
        Vessel::new(at(0, 0), Direction::Horizontal, 0).unwrap_err(),
        RulesError::InvalidSize { length: 0 }
    );
    assert_eq!(
        Vessel::new(at(0, 0), Direction::Horizontal, BOARD_SIZE + 1).unwrap_err(),
        RulesError::InvalidSize {
            length: BOARD_SIZE + 1
        }
    );
}

#[test]
fn test_running_off_the_board() {
    let origin = at(0, BOARD_SIZE as i32 - 2);
    assert_eq!(
        Vessel::new(origin, Direction::Horizontal, 3).unwrap_err(),
        RulesError::InvalidPlacement
    );
    assert_eq!(
        Vessel::new(at(BOARD_SIZE as i32 - 1, 0), Direction::Diagonal, 2).unwrap_err(),
        RulesError::InvalidPlacement
    );
    // fits exactly
    assert!(Vessel::new(origin, Direction::Horizontal, 2).is_ok());
}

#[test]
fn test_fresh_vessel_properties() {
    let ship = vessel(0, 0, Direction::Diagonal, 3);
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.direction(), Direction::Diagonal);
    assert_eq!(ship.origin(), at(0, 0));
    assert_eq!(ship.occupied_cells().len(), 3);
    assert_eq!(ship.struck_cells().count(), 0);
    assert!(!ship.has_been_hit());
    assert_eq!(ship.state(), VesselState::Intact);
}

#[test]
fn test_cells_follow_direction() {
    let h = vessel(1, 2, Direction::Horizontal, 3);
    assert_eq!(h.occupied_cells(), &[at(1, 2), at(1, 3), at(1, 4)]);

    let v = vessel(1, 2, Direction::Vertical, 2);
    assert_eq!(v.occupied_cells(), &[at(1, 2), at(2, 2)]);

    let d = vessel(4, 4, Direction::Diagonal, 2);
    assert_eq!(d.occupied_cells(), &[at(4, 4), at(5, 5)]);
    assert!(d.contains(at(5, 5)));
    assert!(!d.contains(at(4, 5)));
}

#[test]
fn test_first_hit_is_reported() {
    let mut ship = vessel(0, 0, Direction::Horizontal, 3);
    assert_eq!(ship.attack(at(0, 0)), AttackResult::Hit);
    assert_eq!(ship.struck_cells().count(), 1);
    assert_eq!(ship.state(), VesselState::Damaged);
}

#[test]
fn test_miss_leaves_state_alone() {
    let mut ship = vessel(0, 0, Direction::Horizontal, 3);
    assert_eq!(ship.attack(at(1, 0)), AttackResult::Miss);
    assert!(!ship.has_been_hit());
}

#[test]
fn test_repeat_strike_counts_once() {
    let mut ship = vessel(0, 0, Direction::Horizontal, 3);
    assert_eq!(ship.attack(at(0, 1)), AttackResult::Hit);
    assert_eq!(ship.attack(at(0, 1)), AttackResult::Hit);
    assert_eq!(ship.struck_cells().collect::<Vec<_>>(), vec![at(0, 1)]);
}

#[test]
fn test_hit_hit_destroyed_then_miss() {
    let mut ship = vessel(0, 0, Direction::Horizontal, 3);
    assert_eq!(ship.occupied_cells(), &[at(0, 0), at(0, 1), at(0, 2)]);
    assert_eq!(ship.attack(at(0, 0)), AttackResult::Hit);
    assert_eq!(ship.attack(at(0, 1)), AttackResult::Hit);
    assert_eq!(ship.attack(at(0, 2)), AttackResult::Destroyed);
    assert!(ship.is_destroyed());
    assert_eq!(ship.attack(at(0, 1)), AttackResult::Miss);
    assert_eq!(ship.struck_cells().count(), 3);
    assert_eq!(ship.state(), VesselState::Destroyed);
}

#[test]
fn test_single_cell_vessel_goes_straight_to_destroyed() {
    let mut ship = vessel(5, 5, Direction::Vertical, 1);
    assert_eq!(ship.attack(at(5, 5)), AttackResult::Destroyed);
    assert_eq!(ship.attack(at(5, 5)), AttackResult::Miss);
}

#[test]
fn test_same_origin_conflicts() {
    let a = vessel(2, 2, Direction::Horizontal, 3);
    let b = vessel(2, 2, Direction::Vertical, 4);
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
}

#[test]
fn test_adjacent_rows_conflict() {
    let a = vessel(2, 2, Direction::Horizontal, 3);
    let b = vessel(3, 2, Direction::Horizontal, 4);
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
    assert!(!a.overlaps(&b));
}

#[test]
fn test_crossing_vessels_conflict() {
    let a = vessel(0, 5, Direction::Vertical, BOARD_SIZE);
    let b = vessel(5, 0, Direction::Horizontal, BOARD_SIZE);
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
    assert!(a.overlaps(&b));
}

#[test]
fn test_diagonal_touch_conflicts() {
    let a = vessel(2, 2, Direction::Diagonal, 2);
    let b = vessel(4, 4, Direction::Diagonal, 2);
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
}

#[test]
fn test_one_row_gap_is_not_a_conflict() {
    let a = vessel(2, 3, Direction::Horizontal, 5);
    let b = vessel(4, 3, Direction::Horizontal, 5);
    assert!(!a.conflicts_with(&b));
    assert!(!b.conflicts_with(&a));
}

#[test]
fn test_blocked_zone_at_corner() {
    let ship = vessel(0, 0, Direction::Horizontal, 2);
    // rows 0..=1, columns 0..=2
    assert_eq!(ship.blocked_zone().count_ones(), 6);
}
