mod rules;
mod types;

pub use rules::{has_won, is_draw, outcome};
pub use types::{Board, Cell, GameStatus, Player};
