//! Session registry for concurrently-played games.
//!
//! The [`SessionRegistry`] is the only owner of mutable game state. Every
//! operation runs its full lookup + validate + mutate sequence inside a
//! single lock acquisition, so concurrent callers serialize and never
//! observe a partially-updated session. Callers only ever receive cloned
//! snapshots, never references into the registry.

use crate::games::tictactoe::{Board, Cell, GameStatus, Player, outcome};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Why a registry operation was rejected.
///
/// Every variant is a terminal, reported outcome: nothing here is
/// retried, and none of these are fatal to the process. A rejected
/// move leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No session exists with the given identifier.
    #[display("game not found")]
    NotFound,
    /// The game has already ended.
    #[display("game already finished")]
    GameOver,
    /// A coordinate is outside the 0..=2 range.
    #[display("position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already taken")]
    CellOccupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
}

/// One game session: a board, whose turn it is, and the game status.
///
/// There is no player identity: any caller may move for whichever
/// symbol is up next. That matches the service contract, which leaves
/// authentication to a layer that does not exist here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Session {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game ends this stays at whichever player moved last;
    /// it no longer advances.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Validates and applies one move for the current player.
    ///
    /// Validation order: finished game, bounds, occupancy. On any
    /// rejection the session is left exactly as it was.
    fn apply_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let (r, c) = (row as usize, col as usize);
        if self.board.get(r, c) != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }

        let mover = self.current_player;
        self.board.mark(r, c, mover);
        self.status = outcome(&self.board, mover);

        // The turn only advances while the game is still running; a
        // terminal status freezes the session.
        if self.status == GameStatus::InProgress {
            self.current_player = mover.opponent();
        }
        Ok(())
    }
}

/// Owns every active session.
///
/// Cheap to clone; clones share the same underlying state, so one
/// registry can be handed to any number of request handlers. A single
/// coarse lock guards the whole collection: operations are O(board)
/// and never block on I/O while holding it, so there is no value in
/// anything finer-grained at this scale.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
    next_id: Arc<AtomicU64>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session registry");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Allocates the next identifier. Monotonic for the process
    /// lifetime, starting at "1"; identifiers are never reused.
    fn allocate_id(&self) -> SessionId {
        (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }

    /// Creates a new session in the initial state and returns its
    /// snapshot. Always succeeds.
    #[instrument(skip(self))]
    pub fn create(&self) -> Session {
        let id = self.allocate_id();
        let session = Session::new(id.clone());
        let snapshot = session.clone();

        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(id.clone(), session);
        drop(sessions);

        info!(session_id = %id, "Created new session");
        snapshot
    }

    /// Returns a snapshot of the session with the given identifier.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Session, MoveError> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(id) {
            Some(session) => Ok(session.clone()),
            None => {
                debug!(session_id = id, "Session not found");
                Err(MoveError::NotFound)
            }
        }
    }

    /// Submits a move to the session with the given identifier and
    /// returns the updated snapshot.
    ///
    /// The lock is held across lookup, validation, mutation and
    /// snapshotting, so two concurrent submissions to the same session
    /// serialize: exactly one of two conflicting moves on a cell
    /// succeeds, and the other observes [`MoveError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn submit_move(&self, id: &str, row: i32, col: i32) -> Result<Session, MoveError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            MoveError::NotFound
        })?;

        session.apply_move(row, col).map_err(|error| {
            warn!(session_id = id, row, col, %error, "Rejected move");
            error
        })?;

        info!(
            session_id = id,
            row,
            col,
            status = ?session.status(),
            "Move accepted"
        );
        Ok(session.clone())
    }

    /// Lists the identifiers of all active sessions.
    #[instrument(skip(self))]
    pub fn session_ids(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        sessions.keys().cloned().collect()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
