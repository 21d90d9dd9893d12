use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::models::game_match::Match;
use crate::models::responses::PopularGame;
use crate::repositories::errors::match_repository_errors::MatchRepositoryError;
use crate::repositories::game_repository::GAMES_COLLECTION;

#[cfg(test)]
use mockall::automock;

pub const MATCHES_COLLECTION: &str = "matches";

pub struct MongoMatchRepository {
    collection: Collection<Match>,
}

impl MongoMatchRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(MATCHES_COLLECTION),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait MatchRepository: Send + Sync {
    async fn create_match(&self, game_match: &Match) -> Result<(), MatchRepositoryError>;
    /// Matches grouped by game, most-played first; joined with the games
    /// collection for titles. A game with zero matches does not appear.
    async fn popular_games(
        &self,
        game_id: Option<ObjectId>,
    ) -> Result<Vec<PopularGame>, MatchRepositoryError>;
}

fn popular_games_pipeline(game_id: Option<ObjectId>) -> Vec<Document> {
    let mut pipeline = Vec::new();
    if let Some(id) = game_id {
        pipeline.push(doc! { "$match": { "game_id": id } });
    }
    pipeline.extend([
        doc! { "$group": { "_id": "$game_id", "total": { "$sum": 1 } } },
        doc! { "$sort": { "total": -1 } },
        doc! { "$lookup": {
            "from": GAMES_COLLECTION,
            "localField": "_id",
            "foreignField": "_id",
            "as": "game",
        } },
        doc! { "$project": {
            "_id": 0,
            "title": { "$arrayElemAt": ["$game.title", 0] },
            "total_matches": "$total",
        } },
    ]);
    pipeline
}

#[async_trait]
impl MatchRepository for MongoMatchRepository {
    async fn create_match(&self, game_match: &Match) -> Result<(), MatchRepositoryError> {
        self.collection
            .insert_one(game_match)
            .await
            .map_err(|e| MatchRepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    async fn popular_games(
        &self,
        game_id: Option<ObjectId>,
    ) -> Result<Vec<PopularGame>, MatchRepositoryError> {
        let mut cursor = self
            .collection
            .aggregate(popular_games_pipeline(game_id))
            .await
            .map_err(|e| MatchRepositoryError::Database(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| MatchRepositoryError::Database(e.to_string()))?
        {
            rows.push(
                bson::from_document(document)
                    .map_err(|e| MatchRepositoryError::Serialization(e.to_string()))?,
            );
        }
        Ok(rows)
    }
}
