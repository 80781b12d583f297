//! Turn-taking players and move selection.

use crate::console::{Console, ConsoleError};
use noughts_core::{Board, Marker, Position};
use tracing::instrument;

/// Fatal move-selection failure.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SelectError {
    /// The input source ran dry before a valid move arrived.
    #[display("input closed while waiting for a move")]
    InputClosed,
    /// The console itself failed.
    #[display("{_0}")]
    Console(ConsoleError),
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::InputClosed => None,
            SelectError::Console(err) => Some(err),
        }
    }
}

/// A local participant: a label for announcements and a marker to place.
///
/// Both players share the same selection logic; they differ only in
/// identity. A player reads the board it is handed rather than holding
/// a reference back into the engine.
#[derive(Debug, Clone)]
pub struct Player {
    label: String,
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(label: impl Into<String>, marker: Marker) -> Self {
        Self {
            label: label.into(),
            marker,
        }
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Shows the board, then prompts until an entry names a free cell.
    ///
    /// Rejected entries (non-numeric, out of range, occupied) get a
    /// message and a fresh prompt; nothing is mutated along the way.
    ///
    /// # Errors
    ///
    /// `InputClosed` when the input source is exhausted mid-game. A
    /// closed source is never treated as a move.
    #[instrument(skip(self, board, console), fields(marker = %self.marker))]
    pub fn select_position<C: Console>(
        &self,
        board: &Board,
        console: &mut C,
    ) -> Result<Position, SelectError> {
        console.write_line(&board.render())?;
        let prompt = format!("Select your {} position: ", self.marker);
        loop {
            let Some(entry) = console.read_entry(&prompt)? else {
                return Err(SelectError::InputClosed);
            };
            match Position::from_cell(entry) {
                Some(position) if board.free_positions().contains(&position) => {
                    return Ok(position);
                }
                _ => console.write_line(&format!(
                    "Position {entry} is not available. Please try again."
                ))?,
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
