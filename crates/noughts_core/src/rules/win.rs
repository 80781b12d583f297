//! Win detection over the fixed line set.

use crate::position::Position;
use crate::types::{Board, Marker, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Shared read-only by every game; never mutated.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `marker` holds every cell of at least one line.
///
/// Stops at the first completed line in line-set order.
#[instrument(skip(board))]
pub fn has_won(board: &Board, marker: Marker) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&position| board.get(position) == Square::Occupied(marker))
    })
}

/// Returns the marker holding a completed line, if any.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|&marker| has_won(board, marker))
}
