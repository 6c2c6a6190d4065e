use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.to_index(19), 180);

    let pos2 = Pos::from_index(180, 19);
    assert_eq!(pos2, pos);
    assert_eq!(Pos::from_index(7, 5), Pos::new(1, 2));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_new_is_empty() {
    let board = Board::new(DEFAULT_BOARD_SIZE);
    assert_eq!(board.size(), 19);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.center(), Pos::new(9, 9));
}

#[test]
#[should_panic]
fn test_board_zero_size_panics() {
    let _ = Board::new(0);
}

#[test]
fn test_contains() {
    let board = Board::new(5);
    assert!(board.contains(0, 0));
    assert!(board.contains(4, 4));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(5, 0));
    assert!(!board.contains(0, 5));
    assert_eq!(board.stone_at(5, 5), None);
    assert_eq!(board.stone_at(2, 2), Some(Stone::Empty));
}

#[test]
#[should_panic(expected = "off the 5x5 board")]
fn test_get_off_board_column_panics() {
    let mut board = Board::new(5);
    // Index of (0, 7) aliases (1, 2) on a 5x5 grid
    board.apply(Pos::new(1, 2), Stone::Black);
    let _ = board.get(Pos::new(0, 7));
}

#[test]
#[should_panic(expected = "off the 5x5 board")]
fn test_undo_off_board_column_panics() {
    let mut board = Board::new(5);
    board.apply(Pos::new(1, 2), Stone::Black);
    board.undo(Pos::new(0, 7));
}

#[test]
fn test_apply_sets_empty_cell() {
    let mut board = Board::new(5);
    assert!(board.apply(Pos::new(2, 3), Stone::White));
    assert_eq!(board.get(Pos::new(2, 3)), Stone::White);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_apply_rejects_occupied() {
    let mut board = Board::new(5);
    assert!(board.apply(Pos::new(1, 1), Stone::Black));
    let before = board.clone();
    assert!(!board.apply(Pos::new(1, 1), Stone::White));
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Black);
}

#[test]
fn test_apply_rejects_out_of_range_and_empty_stone() {
    let mut board = Board::new(5);
    assert!(!board.apply(Pos::new(5, 0), Stone::Black));
    assert!(!board.apply(Pos::new(0, 7), Stone::Black));
    assert!(!board.apply(Pos::new(0, 0), Stone::Empty));
    assert!(board.is_board_empty());
}

#[test]
fn test_apply_then_undo_restores_board() {
    let mut board = Board::new(7);
    board.apply(Pos::new(3, 3), Stone::Black);
    board.apply(Pos::new(3, 4), Stone::White);
    board.apply(Pos::new(2, 2), Stone::Black);

    for row in 0..7u8 {
        for col in 0..7u8 {
            let pos = Pos::new(row, col);
            let before = board.clone();
            if board.apply(pos, Stone::White) {
                board.undo(pos);
            }
            assert_eq!(board, before, "apply/undo at {pos} changed the board");
        }
    }
}

#[test]
fn test_generate_moves_empty_board() {
    let board = Board::new(19);
    assert!(board.generate_moves().is_empty());
}

#[test]
fn test_generate_moves_single_stone_neighbors() {
    let mut board = Board::new(5);
    board.apply(Pos::new(2, 2), Stone::Black);

    let moves = board.generate_moves();
    let expected = vec![
        Pos::new(1, 1),
        Pos::new(1, 2),
        Pos::new(1, 3),
        Pos::new(2, 1),
        Pos::new(2, 3),
        Pos::new(3, 1),
        Pos::new(3, 2),
        Pos::new(3, 3),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn test_generate_moves_corner_stone() {
    let mut board = Board::new(5);
    board.apply(Pos::new(0, 0), Stone::White);

    let moves = board.generate_moves();
    assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_generate_moves_edge_stone() {
    let mut board = Board::new(5);
    board.apply(Pos::new(0, 2), Stone::Black);

    let moves = board.generate_moves();
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().all(|p| p.row <= 1 && (1..=3).contains(&p.col)));
}

#[test]
fn test_generate_moves_no_occupied_no_duplicates() {
    let mut board = Board::new(6);
    board.apply(Pos::new(2, 2), Stone::Black);
    board.apply(Pos::new(2, 3), Stone::White);
    board.apply(Pos::new(3, 3), Stone::Black);
    board.apply(Pos::new(5, 5), Stone::White);

    let moves = board.generate_moves();
    assert!(moves.iter().all(|&p| board.is_empty(p)));

    let mut sorted = moves.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), moves.len());
    // Row-major generation is already sorted
    assert_eq!(sorted, moves);
}

#[test]
fn test_generate_moves_full_board() {
    let mut board = Board::new(5);
    for row in 0..5u8 {
        for col in 0..5u8 {
            let stone = if (row + col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.apply(Pos::new(row, col), stone);
        }
    }
    assert!(board.is_full());
    assert!(board.generate_moves().is_empty());
    // Empty and full boards both yield no moves; occupancy tells them apart
    assert_eq!(board.stone_count(), 25);
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new(5);
    board.apply(Pos::new(0, 0), Stone::Black);
    board.apply(Pos::new(0, 1), Stone::White);

    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap_or_default();
    assert!(first_row.contains('X'));
    assert!(first_row.contains('O'));
    assert_eq!(text.lines().count(), 6);
}
