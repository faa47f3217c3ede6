//! Game rules: win and draw detection.
//!
//! All functions here are pure and reentrant. Input validity (bounds,
//! occupancy) is the caller's responsibility; the session registry
//! rejects malformed moves before the rules are consulted.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::has_won;

use super::{Board, GameStatus, Player};

/// Evaluates the board after `last_mover` placed a mark.
///
/// The win check takes priority over the draw check: a full board
/// containing a winning line is a win.
pub fn outcome(board: &Board, last_mover: Player) -> GameStatus {
    if has_won(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if is_draw(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
