//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full.
///
/// Callers run the win check first; a full board with a winning line
/// is a win, not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
