//! Tests for the REST routes, driven through the router without a socket.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Utc;
use http_body_util::BodyExt;
use kalah::http::{ErrorResponse, GameResponse, router};
use kalah::{Game, GameId, GameService, GameStorage, InMemoryGameStorage, Side};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

const BASE_URL: &str = "http://localhost:8080";

fn setup() -> (InMemoryGameStorage, Router) {
    let storage = InMemoryGameStorage::new();
    let service = Arc::new(GameService::new(storage.clone()));
    (storage, router(service, BASE_URL))
}

async fn send<T: DeserializeOwned>(app: Router, method: Method, uri: &str) -> (StatusCode, T, Option<String>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .expect("Valid request");

    let response = app.oneshot(request).await.expect("Router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body, content_type)
}

#[tokio::test]
async fn test_create_game() {
    let (storage, app) = setup();

    let (status, body, content_type): (_, GameResponse, _) = send(app, Method::POST, "/games").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body.url, format!("{}/games/{}", BASE_URL, body.id));
    assert!(body.status.is_none());

    let id: GameId = body.id.parse().expect("UUID id");
    assert!(storage.find(&id).expect("Find failed").is_some());
}

#[tokio::test]
async fn test_make_move_returns_board_status() {
    let (storage, app) = setup();
    let game = storage.save(Game::new()).expect("Save failed");

    let uri = format!("/games/{}/pits/6", game.id());
    let (status, body, _): (_, GameResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.id, game.id().to_string());
    let board = body.status.expect("Status map present");
    assert_eq!(board.len(), 14);
    let expected = [6, 6, 6, 6, 6, 0, 1, 7, 7, 7, 7, 7, 6, 0];
    for (index, stones) in expected.iter().enumerate() {
        assert_eq!(board[&(index + 1).to_string()], stones.to_string());
    }

    let stored = storage.find(game.id()).expect("Find failed").expect("Stored");
    assert_eq!(*stored.turn(), Side::PlayerTwo);
}

#[tokio::test]
async fn test_make_move_unknown_game() {
    let (storage, app) = setup();

    let uri = format!("/games/{}/pits/6", GameId::new());
    let (status, body, content_type): (_, ErrorResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "Game not found");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(storage.is_empty().expect("Len failed"));
}

#[tokio::test]
async fn test_make_move_malformed_game_id() {
    let (_storage, app) = setup();
    let (status, body, _): (_, ErrorResponse, _) =
        send(app, Method::PUT, "/games/not-a-game/pits/6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "Game not found");
}

#[tokio::test]
async fn test_make_move_adversary_pit() {
    let (storage, app) = setup();
    let game = storage.save(Game::new()).expect("Save failed");

    let uri = format!("/games/{}/pits/13", game.id());
    let (status, body, _): (_, ErrorResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "Player is trying to move stone from adversary pit");
}

#[tokio::test]
async fn test_make_move_house_pit() {
    let (storage, app) = setup();
    let game = storage.save(Game::new()).expect("Save failed");

    let uri = format!("/games/{}/pits/7", game.id());
    let (status, body, _): (_, ErrorResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "Stones from the house cannot be moved");
}

#[tokio::test]
async fn test_make_move_malformed_pit_id() {
    let (storage, app) = setup();
    let game = storage.save(Game::new()).expect("Save failed");

    let uri = format!("/games/{}/pits/-1", game.id());
    let (status, _body, _): (_, ErrorResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_make_move_finished_game() {
    let (storage, app) = setup();
    let game = storage
        .save(
            Game::new()
                .with_finished_at(Utc::now())
                .with_winner(Side::PlayerOne),
        )
        .expect("Save failed");

    let uri = format!("/games/{}/pits/2", game.id());
    let (status, body, _): (_, ErrorResponse, _) = send(app, Method::PUT, &uri).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.message, "Game is already finished");
}
