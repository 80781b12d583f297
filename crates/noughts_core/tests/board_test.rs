//! Tests for the board contract and the terminal render format.

use noughts_core::{Board, Marker, Position};

#[test]
fn test_empty_board_lists_all_nine_positions() {
    let board = Board::new();
    let free = board.free_positions();

    assert_eq!(free, Position::ALL.to_vec());
    assert!(!board.is_full());
}

#[test]
fn test_free_positions_disjoint_from_occupied() {
    let mut board = Board::new();
    board.set(Position::TopCenter, Marker::X);
    board.set(Position::Center, Marker::O);
    board.set(Position::BottomRight, Marker::X);

    let free = board.free_positions();
    assert_eq!(free.len(), 6);
    for position in [Position::TopCenter, Position::Center, Position::BottomRight] {
        assert!(!free.contains(&position));
        assert!(!board.is_empty(position));
    }
    assert_eq!(board.get(Position::TopCenter).marker(), Some(Marker::X));
    assert_eq!(board.get(Position::TopLeft).marker(), None);
}

#[test]
fn test_empty_board_renders_cell_numbers() {
    let board = Board::new();
    let expected = "\
1 | 2 | 3
--+---+--
4 | 5 | 6
--+---+--
7 | 8 | 9";
    assert_eq!(board.render(), expected);
}

#[test]
fn test_occupied_cells_render_markers() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Marker::X);
    board.set(Position::Center, Marker::O);
    board.set(Position::BottomRight, Marker::X);

    let expected = "\
X | 2 | 3
--+---+--
4 | O | 6
--+---+--
7 | 8 | X";
    assert_eq!(board.render(), expected);
}

#[test]
fn test_render_is_idempotent() {
    let mut board = Board::new();
    board.set(Position::MiddleLeft, Marker::O);
    assert_eq!(board.render(), board.render());
}

#[test]
fn test_board_serde_round_trip() {
    let mut board = Board::new();
    board.set(Position::TopRight, Marker::X);
    board.set(Position::BottomLeft, Marker::O);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}
