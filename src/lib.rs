//! Concurrent tic-tac-toe session service.
//!
//! The core is a [`SessionRegistry`] that owns every active game and a
//! pure rules module that decides move outcomes. A thin axum layer maps
//! three REST operations onto the registry:
//!
//! - `POST /game` creates a session
//! - `GET /game/{id}` reads a session snapshot
//! - `POST /game/{id}/move` submits a `{row, col}` move
//!
//! # Example
//!
//! ```
//! use oxo::{GameStatus, Player, SessionRegistry};
//!
//! let registry = SessionRegistry::new();
//! let session = registry.create();
//! assert_eq!(session.current_player(), Player::X);
//!
//! let session = registry.submit_move(session.id(), 0, 0).unwrap();
//! assert_eq!(session.current_player(), Player::O);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod games;
mod server;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - REST surface
pub use server::{ErrorBody, GameView, MoveRequest, StatusView, router};

// Crate-level exports - Session registry
pub use session::{MoveError, Session, SessionId, SessionRegistry};

// Crate-level exports - Game rules and types
pub use games::tictactoe::{Board, Cell, GameStatus, Player, has_won, is_draw, outcome};
