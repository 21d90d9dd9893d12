use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::responses::{GameRatingSummary, PopularGame};
use crate::repositories::match_repository::MatchRepository;
use crate::repositories::rating_repository::RatingRepository;
use crate::services::errors::report_service_errors::ReportServiceError;

pub struct ReportService {
    matches: Arc<dyn MatchRepository + Send + Sync>,
    ratings: Arc<dyn RatingRepository + Send + Sync>,
}

impl ReportService {
    pub fn new(
        matches: Arc<dyn MatchRepository + Send + Sync>,
        ratings: Arc<dyn RatingRepository + Send + Sync>,
    ) -> Self {
        ReportService { matches, ratings }
    }

    /// Most-played games, optionally narrowed to one game id.
    pub async fn popular_games(
        &self,
        game_id: Option<&str>,
    ) -> Result<Vec<PopularGame>, ReportServiceError> {
        let filter = match game_id {
            Some(raw) => Some(
                ObjectId::parse_str(raw)
                    .map_err(|_| ReportServiceError::InvalidId(raw.to_string()))?,
            ),
            None => None,
        };
        self.matches
            .popular_games(filter)
            .await
            .map_err(|e| ReportServiceError::RepositoryError(e.to_string()))
    }

    /// Average rating and vote count per game, best average first.
    pub async fn rating_summary(&self) -> Result<Vec<GameRatingSummary>, ReportServiceError> {
        self.ratings
            .rating_summary()
            .await
            .map_err(|e| ReportServiceError::RepositoryError(e.to_string()))
    }
}
