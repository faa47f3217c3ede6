//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player's mark as it appears on the wire.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Marked by a player. Marks are never overwritten or cleared.
    Marked(Player),
}

/// The 3x3 board, indexed by `(row, col)` with each coordinate in `0..3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or greater.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Marks the cell at `(row, col)` for `player`.
    ///
    /// Callers check bounds and occupancy first; the registry never calls
    /// this with an out-of-range coordinate or an occupied cell.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or greater.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Marked(player);
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| *cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with a full board and no winner.
    Drawn,
}
