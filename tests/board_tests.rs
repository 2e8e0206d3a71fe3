use seabattle::{
    BoardSetup, Cell, Coord, Orientation, PlaceError, Ship, ShotError, ShotResult, BOARD_SIZE,
};

#[test]
fn test_ship_cells_run_from_the_bow() {
    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );

    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Vertical);
    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(3, 1), Coord::new(4, 1)]
    );
}

#[test]
fn test_covers_matches_occupied_cells_only() {
    let ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(ship.covers(Coord::new(1, 1)));
    assert!(ship.covers(Coord::new(1, 2)));
    assert!(!ship.covers(Coord::new(1, 3)));
    assert!(!ship.covers(Coord::new(2, 1)));
    assert!(!ship.covers(Coord::new(0, 0)));
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    assert_eq!(setup.size(), BOARD_SIZE);
    // stern pokes over the right edge
    assert_eq!(
        setup.place(Ship::new(Coord::new(4, 4), 3, Orientation::Horizontal)),
        Err(PlaceError::OutOfBounds)
    );
    // negative bow
    assert_eq!(
        setup.place(Ship::new(Coord::new(-1, 0), 1, Orientation::Vertical)),
        Err(PlaceError::OutOfBounds)
    );
    assert!(setup.ships().is_empty());
}

#[test]
fn test_place_rejects_diagonal_neighbors() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 3, Orientation::Vertical))
        .unwrap();
    // (1, 1) touches the first ship diagonally
    assert_eq!(
        setup.place(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal)),
        Err(PlaceError::Blocked)
    );
    // one column further is outside the buffer
    setup
        .place(Ship::new(Coord::new(1, 2), 1, Orientation::Horizontal))
        .unwrap();

    // placement stores the ships exactly as given
    let placed = setup.ships();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].bow(), Coord::new(0, 0));
    assert_eq!(placed[0].length(), 3);
    assert_eq!(placed[0].orientation(), Orientation::Vertical);
    assert_eq!(placed[1].bow(), Coord::new(1, 2));
    assert_eq!(placed[1].orientation(), Orientation::Horizontal);
}

#[test]
fn test_failed_place_leaves_the_setup_unchanged() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    let snapshot = setup.clone();

    assert!(setup
        .place(Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal))
        .is_err());
    assert!(setup
        .place(Ship::new(Coord::new(5, 4), 3, Orientation::Horizontal))
        .is_err());
    assert_eq!(setup, snapshot);
}

#[test]
fn test_shots_resolve_hit_already_targeted_then_sunk() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 3, Orientation::Vertical))
        .unwrap();
    let mut board = setup.finish();

    assert_eq!(board.shoot(Coord::new(0, 0)), Ok(ShotResult::Hit));
    assert_eq!(board.ships()[0].hp(), 2);
    assert_eq!(
        board.shoot(Coord::new(0, 0)),
        Err(ShotError::AlreadyTargeted)
    );
    assert_eq!(board.ships()[0].hp(), 2);
    assert_eq!(board.shoot(Coord::new(1, 0)), Ok(ShotResult::Hit));
    assert_eq!(board.shoot(Coord::new(2, 0)), Ok(ShotResult::Sunk));
    assert_eq!(board.ships()[0].hp(), 0);
    assert_eq!(board.sunk_count(), 1);
    assert!(board.all_sunk());
}

#[test]
fn test_missed_shot_marks_the_cell() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();

    assert_eq!(board.shoot(Coord::new(5, 5)), Ok(ShotResult::Miss));
    assert_eq!(board.cell(Coord::new(5, 5)), Some(Cell::Miss));
    assert!(board.was_targeted(Coord::new(5, 5)));
    assert_eq!(board.sunk_count(), 0);
}

#[test]
fn test_rejected_shots_leave_the_board_unchanged() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();

    let snapshot = board.clone();
    assert_eq!(board.shoot(Coord::new(6, 0)), Err(ShotError::OutOfBounds));
    assert_eq!(board.shoot(Coord::new(-1, 3)), Err(ShotError::OutOfBounds));
    assert_eq!(board, snapshot);

    board.shoot(Coord::new(0, 0)).unwrap();
    let snapshot = board.clone();
    assert_eq!(
        board.shoot(Coord::new(0, 0)),
        Err(ShotError::AlreadyTargeted)
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_sinking_reveals_the_surrounding_water() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    setup
        .place(Ship::new(Coord::new(0, 3), 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();

    assert_eq!(board.shoot(Coord::new(0, 0)), Ok(ShotResult::Sunk));
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Sunk));
    for c in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)] {
        assert_eq!(board.cell(c), Some(Cell::Miss));
        assert_eq!(board.shoot(c), Err(ShotError::AlreadyTargeted));
    }
    // the second ship is untouched by the reveal
    assert_eq!(board.cell(Coord::new(0, 3)), Some(Cell::Ship));
    assert!(!board.all_sunk());
}

#[test]
fn test_each_ship_counts_once_when_destroyed() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    setup
        .place(Ship::new(Coord::new(3, 3), 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();

    assert_eq!(board.shoot(Coord::new(0, 0)), Ok(ShotResult::Sunk));
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.all_sunk());
    assert_eq!(board.shoot(Coord::new(3, 3)), Ok(ShotResult::Sunk));
    assert_eq!(board.sunk_count(), 2);
    assert!(board.all_sunk());
}
