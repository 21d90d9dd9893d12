use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::error;

use crate::{error::ApiError, state::AppState};
use shared::models::requests::PopularGamesQuery;
use shared::models::responses::{GameRatingSummary, PopularGame};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/popular-games", get(popular_games))
        .route("/reports/rating-summary", get(rating_summary))
}

async fn popular_games(
    State(state): State<AppState>,
    Query(query): Query<PopularGamesQuery>,
) -> Result<Json<Vec<PopularGame>>, ApiError> {
    state
        .report_service
        .popular_games(query.game_id.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to build popular-games report: {}", e);
            ApiError::from(e)
        })
}

async fn rating_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameRatingSummary>>, ApiError> {
    state
        .report_service
        .rating_summary()
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to build rating-summary report: {}", e);
            ApiError::from(e)
        })
}
