//! Match orchestration between two local players.

use crate::console::{Console, ConsoleError};
use crate::player::{Player, SelectError};
use noughts_core::{Game, GameStatus, Marker, MoveError};
use tracing::{debug, info, instrument};

/// Error that ends a match abnormally.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// Writing an announcement failed.
    #[display("{_0}")]
    Console(ConsoleError),
    /// Move selection failed.
    #[display("{_0}")]
    Select(SelectError),
    /// The engine rejected a move that selection had validated.
    #[display("engine rejected a selected move: {_0}")]
    Move(MoveError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Console(err) => Some(err),
            MatchError::Select(err) => Some(err),
            MatchError::Move(err) => Some(err),
        }
    }
}

/// One game between two local players over a console.
///
/// Created and owned by the entry point: create, run, discard. There is
/// no process-wide game state.
pub struct Match<C> {
    game: Game,
    players: [Player; 2],
    console: C,
}

impl<C: Console> Match<C> {
    /// Creates a match with the standard seats: Player 1 takes X and
    /// moves first, Player 2 takes O.
    pub fn new(console: C) -> Self {
        Self {
            game: Game::new(),
            players: [
                Player::new("Player 1", Marker::X),
                Player::new("Player 2", Marker::O),
            ],
            console,
        }
    }

    /// Plays until a player completes a line or the board fills.
    ///
    /// Each iteration shows the board, obtains and applies the current
    /// player's move, echoes it, then checks for a win before checking
    /// for a full board. Returns the terminal status.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus, MatchError> {
        info!("match started");
        loop {
            let player = &self.players[self.game.to_move().index()];
            let position = player.select_position(self.game.board(), &mut self.console)?;

            self.game.place(position)?;
            self.console.write_line(&format!(
                "{player} selects {} position {}",
                player.marker(),
                position.cell()
            ))?;
            debug!(turn = self.game.turn(), %position, "move applied");

            match self.game.status() {
                GameStatus::Won(marker) => {
                    let winner = &self.players[marker.index()];
                    self.console.write_line(&format!("{winner} wins!"))?;
                    self.console.write_line(&self.game.board().render())?;
                    info!(winner = %winner, "match over");
                    return Ok(self.game.status());
                }
                GameStatus::Draw => {
                    self.console.write_line("It's a draw.")?;
                    self.console.write_line(&self.game.board().render())?;
                    info!("match drawn");
                    return Ok(GameStatus::Draw);
                }
                GameStatus::InProgress => {}
            }
        }
    }

    /// Consumes the match, handing back the console.
    pub fn into_console(self) -> C {
        self.console
    }
}
