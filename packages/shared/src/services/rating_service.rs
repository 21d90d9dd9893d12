use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::rating::Rating;
use crate::models::requests::CreateRatingRequest;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::rating_repository::RatingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::rating_service_errors::RatingServiceError;

pub struct RatingService {
    ratings: Arc<dyn RatingRepository + Send + Sync>,
    users: Arc<dyn UserRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
}

impl RatingService {
    pub fn new(
        ratings: Arc<dyn RatingRepository + Send + Sync>,
        users: Arc<dyn UserRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
    ) -> Self {
        RatingService {
            ratings,
            users,
            games,
        }
    }

    /// Creates one rating. The score is validated before any store access;
    /// the referenced user and game must both exist.
    pub async fn create_rating(
        &self,
        request: CreateRatingRequest,
    ) -> Result<Rating, RatingServiceError> {
        if !(Rating::MIN_SCORE..=Rating::MAX_SCORE).contains(&request.score) {
            return Err(RatingServiceError::ValidationError(format!(
                "Score must be between {} and {}",
                Rating::MIN_SCORE,
                Rating::MAX_SCORE
            )));
        }
        let user_id = parse_id(&request.user_id)?;
        let game_id = parse_id(&request.game_id)?;

        self.users
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => RatingServiceError::UserNotFound,
                _ => RatingServiceError::RepositoryError(e.to_string()),
            })?;
        self.games
            .get_game_by_id(game_id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => RatingServiceError::GameNotFound,
                _ => RatingServiceError::RepositoryError(e.to_string()),
            })?;

        let rating = Rating::new(user_id, game_id, request.score, request.comment);
        self.ratings
            .create_rating(&rating)
            .await
            .map_err(|e| RatingServiceError::RepositoryError(e.to_string()))?;
        Ok(rating)
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, RatingServiceError> {
    ObjectId::parse_str(raw).map_err(|_| RatingServiceError::InvalidId(raw.to_string()))
}
