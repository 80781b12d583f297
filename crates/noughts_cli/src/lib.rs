//! Terminal front end for [`noughts_core`].
//!
//! Wires the pure rules engine to a line-oriented console: an abstract
//! input source and output sink, two local players with a shared
//! selection loop, and the match orchestration that drives a game from
//! empty board to win or draw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod engine;
mod player;

pub use console::{Console, ConsoleError, LineConsole};
pub use engine::{Match, MatchError};
pub use player::{Player, SelectError};
