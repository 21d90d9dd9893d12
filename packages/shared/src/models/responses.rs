use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::{Game, Mechanic};
use crate::models::game_match::Match;
use crate::models::rating::Rating;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Full game record as returned by the game endpoints. Ids are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub category: String,
    pub mechanics: Vec<Mechanic>,
}

impl From<Game> for GameView {
    fn from(game: Game) -> Self {
        GameView {
            id: game.id.to_hex(),
            title: game.title,
            year: game.year,
            category: game.category,
            mechanics: game.mechanics,
        }
    }
}

/// Lightweight game record used when resolving shelf references. Deliberately
/// omits the mechanics list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub category: String,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        GameSummary {
            id: game.id.to_hex(),
            title: game.title.clone(),
            year: game.year,
            category: game.category.clone(),
        }
    }
}

/// One shelf slot. A reference whose game no longer exists resolves to an
/// `unresolved` placeholder instead of failing the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ShelfEntry {
    Resolved(GameSummary),
    Unresolved { id: String },
}

/// Single-user view with the shelf resolved into game summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub shelf: Vec<ShelfEntry>,
}

/// List/creation view of a user; shelf entries stay as raw hex ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub shelf: Vec<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            shelf: user.shelf.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchView {
    pub id: String,
    pub played_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub game_id: String,
    pub player_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
}

impl From<Match> for MatchView {
    fn from(game_match: Match) -> Self {
        MatchView {
            id: game_match.id.to_hex(),
            played_at: game_match.played_at,
            location: game_match.location,
            game_id: game_match.game_id.to_hex(),
            player_ids: game_match.player_ids.iter().map(|id| id.to_hex()).collect(),
            winner_id: game_match.winner_id.map(|id| id.to_hex()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingView {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<Rating> for RatingView {
    fn from(rating: Rating) -> Self {
        RatingView {
            id: rating.id.to_hex(),
            user_id: rating.user_id.to_hex(),
            game_id: rating.game_id.to_hex(),
            score: rating.score,
            comment: rating.comment,
        }
    }
}

/// Row of the popular-games report. `title` is null when the referenced game
/// no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularGame {
    pub title: Option<String>,
    pub total_matches: i64,
}

/// Row of the rating-summary report. The average is rounded to one decimal
/// place by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRatingSummary {
    pub title: Option<String>,
    pub avg_score: f64,
    pub rating_count: i64,
}
