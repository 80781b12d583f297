//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: history length equals the number of occupied cells.
///
/// Every applied move corresponds to exactly one occupied cell. No moves
/// are missing, no cell fills without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|&&square| square != Square::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
