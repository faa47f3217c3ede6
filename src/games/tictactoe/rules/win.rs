//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if `player` occupies all three cells of any winning line.
///
/// Lines are independent conditions, so evaluation order does not
/// affect the result.
#[instrument]
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == Cell::Marked(player)))
}
