use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::is_duplicate_key_error;

#[cfg(test)]
use mockall::automock;

pub const USERS_COLLECTION: &str = "users";

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn get_user_by_id(&self, user_id: ObjectId) -> Result<User, UserRepositoryError>;
    async fn list_users(&self) -> Result<Vec<User>, UserRepositoryError>;
    async fn get_users_by_ids(&self, user_ids: &[ObjectId])
        -> Result<Vec<User>, UserRepositoryError>;
    /// Appends one game reference to the shelf with a single atomic array
    /// push. Read-modify-write would lose concurrent appends.
    async fn push_to_shelf(
        &self,
        user_id: ObjectId,
        game_id: ObjectId,
    ) -> Result<(), UserRepositoryError>;
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.collection.insert_one(user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                UserRepositoryError::DuplicateEmail
            } else {
                UserRepositoryError::Database(e.to_string())
            }
        })?;
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: ObjectId) -> Result<User, UserRepositoryError> {
        self.collection
            .find_one(doc! { "_id": user_id })
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))
    }

    async fn get_users_by_ids(
        &self,
        user_ids: &[ObjectId],
    ) -> Result<Vec<User>, UserRepositoryError> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": user_ids.to_vec() } })
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))
    }

    async fn push_to_shelf(
        &self,
        user_id: ObjectId,
        game_id: ObjectId,
    ) -> Result<(), UserRepositoryError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": user_id },
                doc! { "$push": { "shelf": game_id } },
            )
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?;
        if result.matched_count == 0 {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }
}
