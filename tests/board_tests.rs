use chomp::{Board, GameError};

#[test]
fn test_new_board_full() {
    let board = Board::new(3, 4).unwrap();
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 4);
    assert_eq!(board.remaining(), 12);
    for y in 0..3 {
        for x in 0..4 {
            assert!(board.get(x, y));
        }
    }
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(Board::new(0, 5).unwrap_err(), GameError::InvalidDimensions);
    assert_eq!(Board::new(5, 0).unwrap_err(), GameError::InvalidDimensions);
    assert_eq!(Board::new(0, 0).unwrap_err(), GameError::InvalidDimensions);
}

#[test]
fn test_chomp_clears_staircase_region() {
    let mut board = Board::new(3, 3).unwrap();
    assert_eq!(board.chomp(1, 1).unwrap(), 4);
    assert_eq!(board.remaining(), 5);
    // row 0 untouched, rows below keep only column 0
    for x in 0..3 {
        assert!(board.get(x, 0));
    }
    for y in 1..3 {
        assert!(board.get(0, y));
        assert!(!board.get(1, y));
        assert!(!board.get(2, y));
    }
}

#[test]
fn test_chomp_skips_already_cleared_cells() {
    let mut board = Board::new(3, 3).unwrap();
    assert_eq!(board.chomp(2, 1).unwrap(), 2);
    // (2,1) and (2,2) are gone; chomping (1,1) only eats (1,1) and (1,2)
    assert_eq!(board.chomp(1, 1).unwrap(), 2);
    assert_eq!(board.remaining(), 5);
}

#[test]
fn test_chomp_rejects_poison_bounds_and_eaten() {
    let mut board = Board::new(2, 2).unwrap();
    assert_eq!(board.chomp(0, 0).unwrap_err(), GameError::PoisonSquare);
    assert_eq!(board.chomp(2, 0).unwrap_err(), GameError::OutOfBounds);
    assert_eq!(board.chomp(0, 2).unwrap_err(), GameError::OutOfBounds);
    board.chomp(1, 1).unwrap();
    assert_eq!(board.chomp(1, 1).unwrap_err(), GameError::AlreadyEaten);
    assert_eq!(board.remaining(), 3);
}

#[test]
fn test_valid_moves_row_major_order() {
    let board = Board::new(2, 2).unwrap();
    assert_eq!(board.valid_moves(), vec![(1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_valid_moves_exclude_eaten_squares() {
    let mut board = Board::new(2, 3).unwrap();
    board.chomp(1, 1).unwrap();
    assert_eq!(board.valid_moves(), vec![(1, 0), (2, 0), (0, 1)]);
}

#[test]
fn test_active_rows_and_cols() {
    let mut board = Board::new(3, 4).unwrap();
    assert_eq!(board.active_rows(), 3);
    assert_eq!(board.active_cols(), 4);
    board.chomp(0, 1).unwrap();
    assert_eq!(board.active_rows(), 1);
    assert_eq!(board.active_cols(), 4);
    board.chomp(1, 0).unwrap();
    assert!(board.only_poison_left());
    assert_eq!(board.active_rows(), 1);
    assert_eq!(board.active_cols(), 1);
}

#[test]
fn test_single_square_board_is_terminal_from_the_start() {
    let board = Board::new(1, 1).unwrap();
    assert!(board.only_poison_left());
    assert!(board.valid_moves().is_empty());
}
