use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::requests::RecordMatchRequest;
use shared::models::responses::MatchView;

pub fn routes() -> Router<AppState> {
    Router::new().route("/matches", post(record_match))
}

async fn record_match(
    State(state): State<AppState>,
    Json(request): Json<RecordMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), ApiError> {
    let game_match = state
        .match_service
        .record_match(request)
        .await
        .map_err(|e| {
            error!("Failed to record match: {}", e);
            ApiError::from(e)
        })?;
    debug!("Match recorded: {}", game_match.id.to_hex());
    Ok((StatusCode::CREATED, Json(MatchView::from(game_match))))
}
