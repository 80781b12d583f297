//! Core domain types: markers, squares, and the board.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The symbol a player places in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The X marker (moves first).
    X,
    /// The O marker (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Seat of the player holding this marker. X is seat 0, O is seat 1.
    pub fn index(self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }

    /// Display symbol for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// 3x3 game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    squares: [Square; 9],
}

/// Separator between cells of a rendered row.
const COL_SEPARATOR: &str = " | ";
/// Rule between rendered rows.
const ROW_SEPARATOR: &str = "--+---+--";

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Writes `marker` into the cell at `position`.
    ///
    /// This is a pure write. Callers check the cell is free first; the
    /// engine does so through [`free_positions`](Self::free_positions).
    pub fn set(&mut self, position: Position, marker: Marker) {
        self.squares[position.index()] = Square::Occupied(marker);
    }

    /// Checks whether the cell at `position` is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Every empty cell, in ascending cell order.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|&position| self.is_empty(position))
            .collect()
    }

    /// True once no free positions remain.
    pub fn is_full(&self) -> bool {
        self.free_positions().is_empty()
    }

    /// Renders the board for the terminal.
    ///
    /// Empty cells show their own 1-9 number so a player can see which
    /// number to type; occupied cells show the marker.
    pub fn render(&self) -> String {
        let rows: Vec<String> = Position::ALL
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|&position| match self.get(position) {
                        Square::Occupied(marker) => marker.to_string(),
                        Square::Empty => position.cell().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(COL_SEPARATOR)
            })
            .collect();
        rows.join(&format!("\n{ROW_SEPARATOR}\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
