use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::requests::{CreateGameRequest, ListGamesQuery, UpdateGameRequest};
use shared::models::responses::GameView;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", patch(update_game).delete(delete_game))
}

async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameView>), ApiError> {
    let game = state.game_service.create_game(request).await.map_err(|e| {
        error!("Failed to create game: {}", e);
        ApiError::from(e)
    })?;
    debug!("Game created: {}", game.id.to_hex());
    Ok((StatusCode::CREATED, Json(GameView::from(game))))
}

async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<Vec<GameView>>, ApiError> {
    state
        .game_service
        .list_games(query)
        .await
        .map(|games| Json(games.into_iter().map(GameView::from).collect()))
        .map_err(|e| {
            error!("Failed to list games: {}", e);
            ApiError::from(e)
        })
}

async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGameRequest>,
) -> Result<Json<GameView>, ApiError> {
    let game = state
        .game_service
        .update_game(&id, request)
        .await
        .map_err(|e| {
            error!("Failed to update game {}: {}", id, e);
            ApiError::from(e)
        })?;
    debug!("Game updated: {}", id);
    Ok(Json(GameView::from(game)))
}

async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.game_service.delete_game(&id).await.map_err(|e| {
        error!("Failed to delete game {}: {}", id, e);
        ApiError::from(e)
    })?;
    debug!("Game deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
