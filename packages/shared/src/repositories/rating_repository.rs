use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::models::rating::Rating;
use crate::models::responses::GameRatingSummary;
use crate::repositories::errors::rating_repository_errors::RatingRepositoryError;
use crate::repositories::game_repository::GAMES_COLLECTION;

#[cfg(test)]
use mockall::automock;

pub const RATINGS_COLLECTION: &str = "ratings";

pub struct MongoRatingRepository {
    collection: Collection<Rating>,
}

impl MongoRatingRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(RATINGS_COLLECTION),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait RatingRepository: Send + Sync {
    async fn create_rating(&self, rating: &Rating) -> Result<(), RatingRepositoryError>;
    /// Average score (rounded to one decimal) and vote count per game, best
    /// average first. A game with zero ratings does not appear.
    async fn rating_summary(&self) -> Result<Vec<GameRatingSummary>, RatingRepositoryError>;
}

fn rating_summary_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": {
            "_id": "$game_id",
            "avg": { "$avg": "$score" },
            "count": { "$sum": 1 },
        } },
        doc! { "$lookup": {
            "from": GAMES_COLLECTION,
            "localField": "_id",
            "foreignField": "_id",
            "as": "game",
        } },
        doc! { "$project": {
            "_id": 0,
            "title": { "$arrayElemAt": ["$game.title", 0] },
            "avg_score": { "$round": ["$avg", 1] },
            "rating_count": "$count",
        } },
        doc! { "$sort": { "avg_score": -1 } },
    ]
}

#[async_trait]
impl RatingRepository for MongoRatingRepository {
    async fn create_rating(&self, rating: &Rating) -> Result<(), RatingRepositoryError> {
        self.collection
            .insert_one(rating)
            .await
            .map_err(|e| RatingRepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn rating_summary(&self) -> Result<Vec<GameRatingSummary>, RatingRepositoryError> {
        let mut cursor = self
            .collection
            .aggregate(rating_summary_pipeline())
            .await
            .map_err(|e| RatingRepositoryError::Database(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| RatingRepositoryError::Database(e.to_string()))?
        {
            rows.push(
                bson::from_document(document)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            );
        }
        Ok(rows)
    }
}
