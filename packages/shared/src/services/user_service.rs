use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::requests::CreateUserRequest;
use crate::models::responses::{GameSummary, ShelfEntry, UserView};
use crate::models::user::User;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

pub struct UserService {
    users: Arc<dyn UserRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
    ) -> Self {
        UserService { users, games }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        if request.name.trim().is_empty() || request.email.trim().is_empty() {
            return Err(UserServiceError::ValidationError(
                "Name and email cannot be empty".to_string(),
            ));
        }
        let user = User::new(request.name, request.email);
        // Email uniqueness is enforced by the store index, not pre-checked.
        self.users.create_user(&user).await.map_err(|e| match e {
            UserRepositoryError::DuplicateEmail => UserServiceError::EmailAlreadyExists,
            _ => UserServiceError::RepositoryError(e.to_string()),
        })?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        self.users
            .list_users()
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))
    }

    /// Fetches one user with the shelf resolved into game summaries.
    pub async fn get_user(&self, user_id: &str) -> Result<UserView, UserServiceError> {
        let id = parse_id(user_id)?;
        let user = self.users.get_user_by_id(id).await.map_err(|e| match e {
            UserRepositoryError::NotFound => UserServiceError::UserNotFound,
            _ => UserServiceError::RepositoryError(e.to_string()),
        })?;
        self.resolved_view(user).await
    }

    /// Appends a game reference to the user's shelf. Both ids must resolve;
    /// the append itself is a single atomic array push on the user document.
    /// No deduplication: shelving the same game twice yields two entries.
    pub async fn add_to_shelf(
        &self,
        user_id: &str,
        game_id: &str,
    ) -> Result<UserView, UserServiceError> {
        let uid = parse_id(user_id)?;
        let gid = parse_id(game_id)?;

        self.games.get_game_by_id(gid).await.map_err(|e| match e {
            GameRepositoryError::NotFound => UserServiceError::GameNotFound,
            _ => UserServiceError::RepositoryError(e.to_string()),
        })?;
        self.users.get_user_by_id(uid).await.map_err(|e| match e {
            UserRepositoryError::NotFound => UserServiceError::UserNotFound,
            _ => UserServiceError::RepositoryError(e.to_string()),
        })?;

        self.users
            .push_to_shelf(uid, gid)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;

        let user = self.users.get_user_by_id(uid).await.map_err(|e| match e {
            UserRepositoryError::NotFound => UserServiceError::UserNotFound,
            _ => UserServiceError::RepositoryError(e.to_string()),
        })?;
        self.resolved_view(user).await
    }

    /// Resolves shelf references in order. A reference whose game no longer
    /// exists becomes an unresolved placeholder; the response never fails for
    /// a dangling link.
    async fn resolved_view(&self, user: User) -> Result<UserView, UserServiceError> {
        let shelf = if user.shelf.is_empty() {
            Vec::new()
        } else {
            let games = self
                .games
                .get_games_by_ids(&user.shelf)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
            let by_id: HashMap<ObjectId, &_> = games.iter().map(|g| (g.id, g)).collect();
            user.shelf
                .iter()
                .map(|game_id| match by_id.get(game_id) {
                    Some(game) => ShelfEntry::Resolved(GameSummary::from(*game)),
                    None => ShelfEntry::Unresolved {
                        id: game_id.to_hex(),
                    },
                })
                .collect()
        };

        Ok(UserView {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            shelf,
        })
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, UserServiceError> {
    ObjectId::parse_str(raw).map_err(|_| UserServiceError::InvalidId(raw.to_string()))
}
