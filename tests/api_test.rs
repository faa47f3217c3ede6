//! HTTP-level tests driving the router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use oxo::{SessionRegistry, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    router(SessionRegistry::new())
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_game(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/game")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

async fn get_game(app: &Router, id: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/game/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

async fn post_move(app: &Router, id: &str, row: i32, col: i32) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/game/{id}/move"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "row": row, "col": col }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

#[tokio::test]
async fn test_create_game_returns_initial_snapshot() {
    let app = app();
    let game = create_game(&app).await;

    assert_eq!(game["id"], "1");
    assert_eq!(game["currentPlayer"], "X");
    assert_eq!(game["status"], "in-progress");
    assert_eq!(game["winner"], "");
    assert_eq!(game["board"], json!([["", "", ""], ["", "", ""], ["", "", ""]]));
}

#[tokio::test]
async fn test_get_game_returns_current_snapshot() {
    let app = app();
    let created = create_game(&app).await;

    let (status, fetched) = get_game(&app, "1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_unknown_game_is_404() {
    let app = app();

    let (status, body) = get_game(&app, "42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "game not found");

    let (status, _) = post_move(&app, "42", 0, 0).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_marks_cell_and_flips_player() {
    let app = app();
    create_game(&app).await;

    let (status, game) = post_move(&app, "1", 0, 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["board"][0][0], "X");
    assert_eq!(game["currentPlayer"], "O");
    assert_eq!(game["status"], "in-progress");
}

#[tokio::test]
async fn test_occupied_cell_is_rejected_without_effect() {
    let app = app();
    create_game(&app).await;

    let (_, after_first) = post_move(&app, "1", 0, 0).await;
    let (status, body) = post_move(&app, "1", 0, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cell (0, 0) is already taken");

    let (_, unchanged) = get_game(&app, "1").await;
    assert_eq!(unchanged, after_first);
}

#[tokio::test]
async fn test_out_of_bounds_move_is_rejected() {
    let app = app();
    create_game(&app).await;

    let (status, body) = post_move(&app, "1", 3, 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "position (3, 1) is off the board");

    let (status, _) = post_move(&app, "1", 0, -1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_move_body_is_rejected() {
    let app = app();
    create_game(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/game/1/move")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The rejection never reaches the registry.
    let (_, game) = get_game(&app, "1").await;
    assert_eq!(game["board"], json!([["", "", ""], ["", "", ""], ["", "", ""]]));
}

#[tokio::test]
async fn test_win_reported_over_http() {
    let app = app();
    create_game(&app).await;

    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let (status, _) = post_move(&app, "1", row, col).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, game) = post_move(&app, "1", 0, 2).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["status"], "won");
    assert_eq!(game["winner"], "X");
    assert_eq!(game["board"][0], json!(["X", "X", "X"]));

    let (status, body) = post_move(&app, "1", 2, 2).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "game already finished");
}

#[tokio::test]
async fn test_list_games_returns_active_ids() {
    let app = app();
    create_game(&app).await;
    create_game(&app).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/game").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let mut ids: Vec<String> = serde_json::from_value(body).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["1", "2"]);
}
