use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::game::Game;
use crate::models::requests::{CreateGameRequest, ListGamesQuery, UpdateGameRequest};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::services::errors::game_service_errors::GameServiceError;

pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService { repository }
    }

    pub async fn create_game(&self, request: CreateGameRequest) -> Result<Game, GameServiceError> {
        if request.title.trim().is_empty() || request.category.trim().is_empty() {
            return Err(GameServiceError::ValidationError(
                "Title and category cannot be empty".to_string(),
            ));
        }
        let game = Game::new(
            request.title,
            request.year,
            request.category,
            request.mechanics,
        );
        // Title uniqueness is enforced by the store index, not pre-checked.
        self.repository.create_game(&game).await.map_err(|e| match e {
            GameRepositoryError::DuplicateTitle => GameServiceError::TitleAlreadyExists,
            _ => GameServiceError::RepositoryError(e.to_string()),
        })?;
        Ok(game)
    }

    pub async fn list_games(&self, query: ListGamesQuery) -> Result<Vec<Game>, GameServiceError> {
        self.repository
            .list_games(query.min_year, query.title)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        let id = parse_id(game_id)?;
        self.repository
            .get_game_by_id(id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => GameServiceError::GameNotFound,
                _ => GameServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn update_game(
        &self,
        game_id: &str,
        update: UpdateGameRequest,
    ) -> Result<Game, GameServiceError> {
        let id = parse_id(game_id)?;
        if !update.is_empty() {
            self.repository
                .update_game(id, &update)
                .await
                .map_err(|e| match e {
                    GameRepositoryError::NotFound => GameServiceError::GameNotFound,
                    _ => GameServiceError::RepositoryError(e.to_string()),
                })?;
        }
        self.repository
            .get_game_by_id(id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => GameServiceError::GameNotFound,
                _ => GameServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn delete_game(&self, game_id: &str) -> Result<(), GameServiceError> {
        let id = parse_id(game_id)?;
        self.repository.delete_game(id).await.map_err(|e| match e {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            _ => GameServiceError::RepositoryError(e.to_string()),
        })
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, GameServiceError> {
    ObjectId::parse_str(raw).map_err(|_| GameServiceError::InvalidId(raw.to_string()))
}
