use seabattle::{one_based, render_board, BoardSetup, Coord, Orientation, Ship, BOARD_SIZE};

#[test]
fn test_hidden_boards_mask_intact_ships() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();
    board.set_hidden(true);

    assert!(!render_board(&board, false).contains('■'));
    assert!(render_board(&board, true).contains('■'));

    board.set_hidden(false);
    assert!(render_board(&board, false).contains('■'));
}

#[test]
fn test_shot_outcomes_render_distinctly() {
    let mut setup = BoardSetup::new(BOARD_SIZE);
    setup
        .place(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    setup
        .place(Ship::new(Coord::new(3, 3), 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.finish();
    board.set_hidden(true);
    board.shoot(Coord::new(0, 0)).unwrap();
    board.shoot(Coord::new(5, 5)).unwrap();
    board.shoot(Coord::new(3, 3)).unwrap();

    let view = render_board(&board, false);
    assert!(view.contains('X'), "hit marker missing:\n{view}");
    assert!(view.contains('.'), "miss marker missing:\n{view}");
    assert!(view.contains('#'), "sunk marker missing:\n{view}");
    assert!(
        !view.contains('■'),
        "intact ship leaked through concealment:\n{view}"
    );
}

#[test]
fn test_header_and_rows_are_one_based() {
    let board = BoardSetup::new(BOARD_SIZE).finish();
    let view = render_board(&board, false);
    let mut lines = view.lines();
    assert_eq!(lines.next(), Some("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
    assert_eq!(lines.next(), Some("1 | O | O | O | O | O | O |"));
    assert_eq!(lines.count(), 5);
}

#[test]
fn test_one_based_formats_like_typed_input() {
    assert_eq!(one_based(Coord::new(0, 0)), "1 1");
    assert_eq!(one_based(Coord::new(4, 2)), "5 3");
}
