//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::Invariant;
use crate::game::{Game, GameStatus};
use crate::types::Marker;

/// Invariant: players alternate turns.
///
/// The recorded history must show the X, O, X, O, ... pattern starting
/// with X, and while the game is in progress the marker to move matches
/// the turn parity.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.marker != Marker::X) {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].marker == pair[1].marker)
        {
            return false;
        }

        if game.status() == GameStatus::InProgress {
            let expected = if history.len() % 2 == 0 {
                Marker::X
            } else {
                Marker::O
            };
            return game.to_move() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
