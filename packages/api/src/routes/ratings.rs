use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::requests::CreateRatingRequest;
use shared::models::responses::RatingView;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ratings", post(create_rating))
}

async fn create_rating(
    State(state): State<AppState>,
    Json(request): Json<CreateRatingRequest>,
) -> Result<(StatusCode, Json<RatingView>), ApiError> {
    let rating = state
        .rating_service
        .create_rating(request)
        .await
        .map_err(|e| {
            error!("Failed to create rating: {}", e);
            ApiError::from(e)
        })?;
    debug!(
        "Game {} rated {} by user {}",
        rating.game_id.to_hex(),
        rating.score,
        rating.user_id.to_hex()
    );
    Ok((StatusCode::CREATED, Json(RatingView::from(rating))))
}
