//! Draw detection.

use super::win::winning_marker;
use crate::types::Board;
use tracing::instrument;

/// Checks whether the game is drawn: board full, no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_marker(board).is_none()
}
