//! Monotonic board invariant: applied moves never revert.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: every recorded move is still on the board.
///
/// A cell never transitions from a marker back to empty, and never
/// changes from one marker to the other, during a game.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .all(|mv| game.board().get(mv.position) == Square::Occupied(mv.marker))
    }

    fn description() -> &'static str {
        "Applied moves stay on the board with their original marker"
    }
}
