//! REST surface over the session registry.
//!
//! Three operations: create a game, read a game, submit a move. The
//! registry is injected as axum state rather than living in a global,
//! so tests can build as many independent routers as they like.

use crate::games::tictactoe::{Cell, GameStatus, Player};
use crate::session::{MoveError, Session, SessionId, SessionRegistry};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Move submission payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Target row, expected in `0..=2`.
    pub row: i32,
    /// Target column, expected in `0..=2`.
    pub col: i32,
}

/// Wire form of the game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusView {
    /// Game is ongoing.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Game ended with a winner.
    #[serde(rename = "won")]
    Won,
    /// Game ended in a draw.
    #[serde(rename = "drawn")]
    Drawn,
}

/// Wire form of a session snapshot.
///
/// The board is a 3x3 grid of `""`, `"X"` or `"O"`; `winner` is empty
/// unless the status is `won`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Session identifier.
    pub id: String,
    /// The board, row-major.
    pub board: [[String; 3]; 3],
    /// Whose turn it is.
    pub current_player: Player,
    /// Game status.
    pub status: StatusView,
    /// Winning symbol, or empty.
    pub winner: String,
}

impl From<&Session> for GameView {
    fn from(session: &Session) -> Self {
        let board = std::array::from_fn(|row| {
            std::array::from_fn(|col| match session.board().get(row, col) {
                Cell::Empty => String::new(),
                Cell::Marked(player) => player.symbol().to_string(),
            })
        });
        let (status, winner) = match session.status() {
            GameStatus::InProgress => (StatusView::InProgress, String::new()),
            GameStatus::Won(player) => (StatusView::Won, player.symbol().to_string()),
            GameStatus::Drawn => (StatusView::Drawn, String::new()),
        };
        Self {
            id: session.id().to_string(),
            board,
            current_player: session.current_player(),
            status,
            winner,
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

impl IntoResponse for MoveError {
    fn into_response(self) -> Response {
        let status = match self {
            MoveError::NotFound => StatusCode::NOT_FOUND,
            MoveError::GameOver | MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handler for `POST /game`: creates a session.
#[instrument(skip(registry))]
async fn create_game(State(registry): State<SessionRegistry>) -> (StatusCode, Json<GameView>) {
    let session = registry.create();
    info!(session_id = %session.id(), "Created game over HTTP");
    (StatusCode::CREATED, Json(GameView::from(&session)))
}

/// Handler for `GET /game`: lists active session identifiers.
#[instrument(skip(registry))]
async fn list_games(State(registry): State<SessionRegistry>) -> Json<Vec<SessionId>> {
    Json(registry.session_ids())
}

/// Handler for `GET /game/{id}`: reads a session snapshot.
#[instrument(skip(registry))]
async fn get_game(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, MoveError> {
    let session = registry.get(&id)?;
    Ok(Json(GameView::from(&session)))
}

/// Handler for `POST /game/{id}/move`: submits a move.
///
/// An unparseable body is rejected by the `Json` extractor with a 400
/// before the registry is involved.
#[instrument(skip(registry))]
async fn make_move(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
    Json(mv): Json<MoveRequest>,
) -> Result<Json<GameView>, MoveError> {
    let session = registry.submit_move(&id, mv.row, mv.col)?;
    Ok(Json(GameView::from(&session)))
}

/// Builds the application router around a registry.
pub fn router(registry: SessionRegistry) -> Router {
    Router::new()
        .route("/game", post(create_game).get(list_games))
        .route("/game/{id}", get(get_game))
        .route("/game/{id}/move", post(make_move))
        .with_state(registry)
}
