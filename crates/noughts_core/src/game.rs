//! Game state machine: board, turn order, and outcome.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a game. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A marker completed a line.
    Won(Marker),
    /// The board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One applied move: a marker written to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

/// Error placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a marker.
    #[display("position {_0} is already occupied")]
    Occupied(Position),
    /// No moves are accepted after a win or draw.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A game of noughts and crosses.
///
/// Created once per session with an empty board and X to move, mutated
/// only through [`place`](Self::place), discarded when the match ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Marker,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Marker::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the applied moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of applied moves.
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    /// Places the current marker at `position`.
    ///
    /// On success, checks in order: win, then full board, else passes
    /// the turn to the opponent.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game is terminal, `Occupied` when the cell
    /// already holds a marker. Neither mutates the game.
    #[instrument(skip(self), fields(marker = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }

        let marker = self.to_move;
        self.board.set(position, marker);
        self.history.push(Move { marker, position });

        if rules::has_won(&self.board, marker) {
            self.status = GameStatus::Won(marker);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = marker.opponent();
        }

        debug_assert!(GameInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Mutable board access for invariant tests.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_empty_and_in_progress() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Marker::X);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.board().free_positions().len(), 9);
    }

    #[test]
    fn test_place_passes_the_turn() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Marker::O);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        let before = game.board().clone();

        let err = game.place(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::Occupied(Position::Center));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Marker::O);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut game = Game::new();
        // X: 1, 2, 3 wins; O: 4, 5.
        for position in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.place(position).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Won(Marker::X));
        assert_eq!(game.turn(), 5);
        assert_eq!(
            game.place(Position::BottomRight).unwrap_err(),
            MoveError::GameOver
        );
        assert_eq!(game.turn(), 5);
    }

    #[test]
    fn test_full_board_without_lines_draws() {
        let mut game = Game::new();
        // Ends as X O X / O X X / O X O.
        for cell in [1, 2, 3, 4, 5, 7, 6, 9, 8] {
            game.place(Position::from_cell(cell).unwrap()).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
    }
}
