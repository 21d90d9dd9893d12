use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::game_match::Match;
use crate::models::requests::RecordMatchRequest;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::match_repository::MatchRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::match_service_errors::MatchServiceError;

pub struct MatchService {
    matches: Arc<dyn MatchRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl MatchService {
    pub fn new(
        matches: Arc<dyn MatchRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
        users: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        MatchService {
            matches,
            games,
            users,
        }
    }

    /// Records one match. The game and every listed player must resolve; if
    /// any player is missing the whole operation fails and nothing is
    /// persisted. A supplied winner must resolve to an existing user, but is
    /// not required to be one of the players.
    pub async fn record_match(
        &self,
        request: RecordMatchRequest,
    ) -> Result<Match, MatchServiceError> {
        let game_id = parse_id(&request.game_id)?;
        let mut player_ids = Vec::with_capacity(request.player_ids.len());
        for raw in &request.player_ids {
            player_ids.push(parse_id(raw)?);
        }

        self.games
            .get_game_by_id(game_id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => MatchServiceError::GameNotFound,
                _ => MatchServiceError::RepositoryError(e.to_string()),
            })?;

        let players = self
            .users
            .get_users_by_ids(&player_ids)
            .await
            .map_err(|e| MatchServiceError::RepositoryError(e.to_string()))?;
        if players.len() != player_ids.len() {
            return Err(MatchServiceError::PlayerNotFound);
        }

        let winner_id = match &request.winner_id {
            Some(raw) => {
                let id = parse_id(raw)?;
                self.users.get_user_by_id(id).await.map_err(|e| match e {
                    UserRepositoryError::NotFound => MatchServiceError::WinnerNotFound,
                    _ => MatchServiceError::RepositoryError(e.to_string()),
                })?;
                Some(id)
            }
            None => None,
        };

        let game_match = Match::new(
            game_id,
            player_ids,
            request.location,
            winner_id,
            request.played_at,
        );
        self.matches
            .create_match(&game_match)
            .await
            .map_err(|e| MatchServiceError::RepositoryError(e.to_string()))?;
        Ok(game_match)
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, MatchServiceError> {
    ObjectId::parse_str(raw).map_err(|_| MatchServiceError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::Game;
    use crate::models::user::User;
    use crate::repositories::game_repository::MockGameRepository;
    use crate::repositories::match_repository::MockMatchRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::{DateTime, Utc};

    fn sample_game() -> Game {
        Game::new("Catan".to_string(), 1995, "Strategy".to_string(), vec![])
    }

    fn sample_user(name: &str) -> User {
        User::new(name.to_string(), format!("{}@example.com", name))
    }

    fn request(game_id: ObjectId, player_ids: &[ObjectId]) -> RecordMatchRequest {
        RecordMatchRequest {
            game_id: game_id.to_hex(),
            player_ids: player_ids.iter().map(|id| id.to_hex()).collect(),
            location: None,
            winner_id: None,
            played_at: None,
        }
    }

    #[tokio::test]
    async fn test_record_match_persists_with_server_timestamp() {
        let game = sample_game();
        let game_id = game.id;
        let alice = sample_user("alice");
        let bruno = sample_user("bruno");
        let player_ids = vec![alice.id, bruno.id];

        let mut mock_games = MockGameRepository::new();
        mock_games.expect_get_game_by_id().returning(move |_| {
            let game = game.clone();
            Box::pin(async move { Ok(game) })
        });

        let mut mock_users = MockUserRepository::new();
        let players = vec![alice, bruno];
        mock_users.expect_get_users_by_ids().returning(move |_| {
            let players = players.clone();
            Box::pin(async move { Ok(players) })
        });

        let mut mock_matches = MockMatchRepository::new();
        mock_matches
            .expect_create_match()
            .withf(move |m| m.game_id == game_id && m.player_ids.len() == 2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let game_match = service.record_match(request(game_id, &player_ids)).await.unwrap();

        assert_eq!(game_match.player_ids, player_ids);
        assert!(game_match.winner_id.is_none());
        assert!((Utc::now() - game_match.played_at).num_seconds() < 10);
    }

    #[tokio::test]
    async fn test_record_match_keeps_supplied_timestamp() {
        let game = sample_game();
        let game_id = game.id;

        let mut mock_games = MockGameRepository::new();
        mock_games.expect_get_game_by_id().returning(move |_| {
            let game = game.clone();
            Box::pin(async move { Ok(game) })
        });
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_get_users_by_ids()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        let mut mock_matches = MockMatchRepository::new();
        mock_matches
            .expect_create_match()
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let played_at: DateTime<Utc> = "2024-06-01T20:30:00Z".parse().unwrap();
        let mut req = request(game_id, &[]);
        req.played_at = Some(played_at);

        let game_match = service.record_match(req).await.unwrap();
        assert_eq!(game_match.played_at, played_at);
    }

    #[tokio::test]
    async fn test_record_match_rejects_partial_player_resolution() {
        let game = sample_game();
        let game_id = game.id;
        let known = sample_user("alice");
        let known_id = known.id;
        let unknown_id = ObjectId::new();

        let mut mock_games = MockGameRepository::new();
        mock_games.expect_get_game_by_id().returning(move |_| {
            let game = game.clone();
            Box::pin(async move { Ok(game) })
        });

        let mut mock_users = MockUserRepository::new();
        mock_users.expect_get_users_by_ids().returning(move |_| {
            let players = vec![known.clone()];
            Box::pin(async move { Ok(players) })
        });

        // Nothing may be persisted on partial resolution.
        let mut mock_matches = MockMatchRepository::new();
        mock_matches.expect_create_match().never();

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let result = service
            .record_match(request(game_id, &[known_id, unknown_id]))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            MatchServiceError::PlayerNotFound
        ));
    }

    #[tokio::test]
    async fn test_record_match_missing_game_is_not_found() {
        let mut mock_games = MockGameRepository::new();
        mock_games
            .expect_get_game_by_id()
            .returning(|_| Box::pin(async { Err(GameRepositoryError::NotFound) }));
        let mut mock_users = MockUserRepository::new();
        mock_users.expect_get_users_by_ids().never();
        let mut mock_matches = MockMatchRepository::new();
        mock_matches.expect_create_match().never();

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let result = service.record_match(request(ObjectId::new(), &[])).await;

        assert!(matches!(result.unwrap_err(), MatchServiceError::GameNotFound));
    }

    #[tokio::test]
    async fn test_record_match_missing_winner_is_not_found() {
        let game = sample_game();
        let game_id = game.id;

        let mut mock_games = MockGameRepository::new();
        mock_games.expect_get_game_by_id().returning(move |_| {
            let game = game.clone();
            Box::pin(async move { Ok(game) })
        });
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_get_users_by_ids()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        mock_users
            .expect_get_user_by_id()
            .returning(|_| Box::pin(async { Err(UserRepositoryError::NotFound) }));
        let mut mock_matches = MockMatchRepository::new();
        mock_matches.expect_create_match().never();

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let mut req = request(game_id, &[]);
        req.winner_id = Some(ObjectId::new().to_hex());

        let result = service.record_match(req).await;
        assert!(matches!(
            result.unwrap_err(),
            MatchServiceError::WinnerNotFound
        ));
    }

    #[tokio::test]
    async fn test_record_match_accepts_winner_outside_player_list() {
        let game = sample_game();
        let game_id = game.id;
        let player = sample_user("alice");
        let player_id = player.id;
        let outsider = sample_user("bruno");
        let outsider_id = outsider.id;

        let mut mock_games = MockGameRepository::new();
        mock_games.expect_get_game_by_id().returning(move |_| {
            let game = game.clone();
            Box::pin(async move { Ok(game) })
        });
        let mut mock_users = MockUserRepository::new();
        mock_users.expect_get_users_by_ids().returning(move |_| {
            let players = vec![player.clone()];
            Box::pin(async move { Ok(players) })
        });
        mock_users.expect_get_user_by_id().returning(move |_| {
            let outsider = outsider.clone();
            Box::pin(async move { Ok(outsider) })
        });
        let mut mock_matches = MockMatchRepository::new();
        mock_matches
            .expect_create_match()
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = MatchService::new(
            Arc::new(mock_matches),
            Arc::new(mock_games),
            Arc::new(mock_users),
        );
        let mut req = request(game_id, &[player_id]);
        req.winner_id = Some(outsider_id.to_hex());

        let game_match = service.record_match(req).await.unwrap();
        assert_eq!(game_match.winner_id, Some(outsider_id));
    }
}
