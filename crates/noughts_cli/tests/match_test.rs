//! Scripted end-to-end games over an in-memory console.

use noughts_cli::{LineConsole, Match, MatchError, SelectError};
use noughts_core::{GameStatus, Marker};
use std::io::{Cursor, Read};

/// Runs a full match against scripted input. Returns the result, the
/// console transcript, and whatever input was never read.
fn play(input: &str) -> (Result<GameStatus, MatchError>, String, String) {
    let mut game_match = Match::new(LineConsole::new(Cursor::new(input), Vec::new()));
    let result = game_match.run();

    let (mut reader, writer) = game_match.into_console().into_parts();
    let mut unread = String::new();
    reader.read_to_string(&mut unread).unwrap();

    (result, String::from_utf8(writer).unwrap(), unread)
}

#[test]
fn test_five_move_win_produces_exact_transcript() {
    let (result, output, unread) = play("1\n4\n2\n5\n3\n9\n");

    let expected = concat!(
        "1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your X position: ",
        "Player 1 selects X position 1\n",
        "X | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your O position: ",
        "Player 2 selects O position 4\n",
        "X | 2 | 3\n--+---+--\nO | 5 | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your X position: ",
        "Player 1 selects X position 2\n",
        "X | X | 3\n--+---+--\nO | 5 | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your O position: ",
        "Player 2 selects O position 5\n",
        "X | X | 3\n--+---+--\nO | O | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your X position: ",
        "Player 1 selects X position 3\n",
        "Player 1 wins!\n",
        "X | X | X\n--+---+--\nO | O | 6\n--+---+--\n7 | 8 | 9\n",
    );

    assert_eq!(result.unwrap(), GameStatus::Won(Marker::X));
    assert_eq!(output, expected);
    // The game ended on move five; the sixth entry was never requested.
    assert_eq!(unread, "9\n");
}

#[test]
fn test_occupied_cell_is_rejected_and_reprompted() {
    let (result, output, _) = play("1\n1\n4\n2\n5\n3\n");

    assert_eq!(result.unwrap(), GameStatus::Won(Marker::X));
    assert!(output.contains("Position 1 is not available. Please try again.\n"));
    // O was prompted twice on the rejected turn, once on the next.
    assert_eq!(output.matches("Select your O position: ").count(), 3);
    assert_eq!(output.matches("Player 2 selects O position").count(), 2);
}

#[test]
fn test_unparseable_and_out_of_range_entries_reprompt() {
    let (result, output, _) = play("banana\n12\n");

    let expected = concat!(
        "1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n",
        "Select your X position: ",
        "Position 0 is not available. Please try again.\n",
        "Select your X position: ",
        "Position 12 is not available. Please try again.\n",
        "Select your X position: ",
    );

    assert!(matches!(
        result,
        Err(MatchError::Select(SelectError::InputClosed))
    ));
    assert_eq!(output, expected);
}

#[test]
fn test_full_board_without_winner_announces_draw() {
    let (result, output, unread) = play("1\n2\n3\n4\n5\n7\n6\n9\n8\n");

    assert_eq!(result.unwrap(), GameStatus::Draw);
    assert!(output.ends_with(concat!(
        "It's a draw.\n",
        "X | O | X\n--+---+--\nO | X | X\n--+---+--\nO | X | O\n",
    )));
    assert_eq!(unread, "");
}

#[test]
fn test_exhausted_input_is_fatal_not_a_move() {
    let (result, output, _) = play("");

    assert!(matches!(
        result,
        Err(MatchError::Select(SelectError::InputClosed))
    ));
    // The board and a single prompt went out; no move was fabricated.
    assert_eq!(
        output,
        concat!(
            "1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n",
            "Select your X position: ",
        )
    );
}

#[test]
fn test_second_player_can_win() {
    // X: 1, 2, 7; O takes the middle row.
    let (result, output, _) = play("1\n4\n2\n5\n7\n6\n");

    assert_eq!(result.unwrap(), GameStatus::Won(Marker::O));
    assert!(output.contains("Player 2 wins!\n"));
    assert!(!output.contains("Player 1 wins!"));
}
