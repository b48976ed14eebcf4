//! REST transport.
//!
//! - `POST /games` creates a game: `201` with `{"id", "url"}`
//! - `PUT /games/{game_id}/pits/{pit_id}` plays a move: `200` with
//!   `{"id", "url", "status"}`, where `status` maps each 1-based slot to its
//!   stone count
//!
//! Failures answer with `{"message"}` and a status code chosen by
//! [`GameError`] kind.

use crate::error::GameError;
use crate::service::GameService;
use crate::storage::GameStorage;
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, put},
};
use derive_new::new;
use kalah_core::{Game, GameId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, error, info, instrument};

/// Body returned for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameResponse {
    /// Game identifier.
    pub id: String,
    /// Absolute URL of the game resource.
    pub url: String,
    /// Stone count per 1-based slot; omitted on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BTreeMap<String, String>>,
}

/// Body returned for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub message: String,
}

struct AppState<S> {
    service: Arc<GameService<S>>,
    public_url: Arc<str>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            public_url: Arc::clone(&self.public_url),
        }
    }
}

impl<S> AppState<S> {
    fn game_url(&self, id: &GameId) -> String {
        format!("{}/games/{}", self.public_url.trim_end_matches('/'), id)
    }
}

/// Builds the router; `public_url` prefixes the `url` field of responses.
pub fn router<S: GameStorage + 'static>(
    service: Arc<GameService<S>>,
    public_url: impl Into<String>,
) -> Router {
    let state = AppState {
        service,
        public_url: Arc::from(public_url.into()),
    };

    Router::new()
        .route("/games", post(create_game::<S>))
        .route("/games/{game_id}/pits/{pit_id}", put(make_move::<S>))
        .with_state(state)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
}

#[instrument(skip_all)]
async fn create_game<S: GameStorage + 'static>(
    State(state): State<AppState<S>>,
) -> Result<(StatusCode, Json<GameResponse>), GameError> {
    let game = state.service.create_game()?;
    let body = GameResponse::new(game.id().to_string(), state.game_url(game.id()), None);
    Ok((StatusCode::CREATED, Json(body)))
}

#[instrument(skip_all, fields(game_id = %game_id, pit_id = %pit_id))]
async fn make_move<S: GameStorage + 'static>(
    State(state): State<AppState<S>>,
    Path((game_id, pit_id)): Path<(String, String)>,
) -> Result<Json<GameResponse>, Response> {
    let Ok(id) = game_id.parse::<GameId>() else {
        debug!(%game_id, "Unparsable game id");
        return Err(error_response(
            StatusCode::NOT_FOUND,
            "Game not found".to_string(),
        ));
    };
    let Ok(slot) = pit_id.parse::<u32>() else {
        debug!(%pit_id, "Unparsable pit id");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid pit id '{}'", pit_id),
        ));
    };

    let game = state
        .service
        .make_move(&id, slot)
        .map_err(IntoResponse::into_response)?;
    Ok(Json(game_status_response(&state, &game)))
}

fn game_status_response<S>(state: &AppState<S>, game: &Game) -> GameResponse {
    let status = game
        .board()
        .pits()
        .iter()
        .enumerate()
        .map(|(index, stones)| ((index + 1).to_string(), stones.to_string()))
        .collect();
    GameResponse::new(game.id().to_string(), state.game_url(game.id()), Some(status))
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

impl GameError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::InvalidMove(_) => StatusCode::BAD_REQUEST,
            GameError::AlreadyFinished => StatusCode::CONFLICT,
            GameError::InvalidArgument(_) | GameError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, %status, "Request rejected");
        }
        error_response(status, self.to_string())
    }
}
