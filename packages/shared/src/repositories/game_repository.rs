use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::models::game::Game;
use crate::models::requests::UpdateGameRequest;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::is_duplicate_key_error;

#[cfg(test)]
use mockall::automock;

pub const GAMES_COLLECTION: &str = "games";

pub struct MongoGameRepository {
    collection: Collection<Game>,
}

impl MongoGameRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(GAMES_COLLECTION),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;
    async fn get_game_by_id(&self, game_id: ObjectId) -> Result<Game, GameRepositoryError>;
    async fn list_games(
        &self,
        min_year: Option<i32>,
        title: Option<String>,
    ) -> Result<Vec<Game>, GameRepositoryError>;
    async fn get_games_by_ids(&self, game_ids: &[ObjectId])
        -> Result<Vec<Game>, GameRepositoryError>;
    async fn update_game(
        &self,
        game_id: ObjectId,
        update: &UpdateGameRequest,
    ) -> Result<(), GameRepositoryError>;
    async fn delete_game(&self, game_id: ObjectId) -> Result<(), GameRepositoryError>;
}

/// Builds the `$set` document for a partial update. Absent fields are left
/// untouched; a present mechanics list is converted to named-mechanic records
/// with no description.
fn set_document(update: &UpdateGameRequest) -> Document {
    let mut set = Document::new();
    if let Some(title) = &update.title {
        set.insert("title", title);
    }
    if let Some(year) = update.year {
        set.insert("year", year);
    }
    if let Some(category) = &update.category {
        set.insert("category", category);
    }
    if let Some(names) = &update.mechanics {
        let mechanics: Vec<Document> = names.iter().map(|name| doc! { "name": name }).collect();
        set.insert("mechanics", mechanics);
    }
    set
}

#[async_trait]
impl GameRepository for MongoGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        self.collection.insert_one(game).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                GameRepositoryError::DuplicateTitle
            } else {
                GameRepositoryError::Database(e.to_string())
            }
        })?;
        Ok(())
    }

    async fn get_game_by_id(&self, game_id: ObjectId) -> Result<Game, GameRepositoryError> {
        self.collection
            .find_one(doc! { "_id": game_id })
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))?
            .ok_or(GameRepositoryError::NotFound)
    }

    async fn list_games(
        &self,
        min_year: Option<i32>,
        title: Option<String>,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let mut filter = Document::new();
        if let Some(year) = min_year {
            filter.insert("year", doc! { "$gte": year });
        }
        if let Some(title) = title {
            filter.insert("title", doc! { "$regex": title, "$options": "i" });
        }
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "year": -1 })
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))
    }

    async fn get_games_by_ids(
        &self,
        game_ids: &[ObjectId],
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": game_ids.to_vec() } })
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))
    }

    async fn update_game(
        &self,
        game_id: ObjectId,
        update: &UpdateGameRequest,
    ) -> Result<(), GameRepositoryError> {
        let result = self
            .collection
            .update_one(doc! { "_id": game_id }, doc! { "$set": set_document(update) })
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))?;
        if result.matched_count == 0 {
            return Err(GameRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_game(&self, game_id: ObjectId) -> Result<(), GameRepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": game_id })
            .await
            .map_err(|e| GameRepositoryError::Database(e.to_string()))?;
        if result.deleted_count == 0 {
            return Err(GameRepositoryError::NotFound);
        }
        Ok(())
    }
}
