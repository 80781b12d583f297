//! Pure rules engine for two-player noughts and crosses.
//!
//! Holds the board model, the fixed winning-line set, win and draw
//! detection, and the turn-taking state machine. No I/O lives here;
//! the console front end drives a [`Game`] through [`Game::place`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod types;

pub mod invariants;

pub use game::{Game, GameStatus, Move, MoveError};
pub use position::Position;
pub use rules::{has_won, is_draw, winning_marker, LINES};
pub use types::{Board, Marker, Square};
