use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::requests::{AddToShelfRequest, CreateUserRequest};
use shared::models::responses::{UserSummary, UserView};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/shelf", post(add_to_shelf))
        .route("/users/{id}", get(get_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserSummary>), ApiError> {
    let user = state.user_service.create_user(request).await.map_err(|e| {
        error!("Failed to create user: {}", e);
        ApiError::from(e)
    })?;
    debug!("User created: {}", user.id.to_hex());
    Ok((StatusCode::CREATED, Json(UserSummary::from(user))))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map(|users| Json(users.into_iter().map(UserSummary::from).collect()))
        .map_err(|e| {
            error!("Failed to list users: {}", e);
            ApiError::from(e)
        })
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, ApiError> {
    state.user_service.get_user(&id).await.map(Json).map_err(|e| {
        error!("Failed to retrieve user {}: {}", id, e);
        ApiError::from(e)
    })
}

async fn add_to_shelf(
    State(state): State<AppState>,
    Json(request): Json<AddToShelfRequest>,
) -> Result<Json<UserView>, ApiError> {
    let view = state
        .user_service
        .add_to_shelf(&request.user_id, &request.game_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to shelve game {} for user {}: {}",
                request.game_id, request.user_id, e
            );
            ApiError::from(e)
        })?;
    debug!(
        "Game {} shelved for user {}",
        request.game_id, request.user_id
    );
    Ok(Json(view))
}
