use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub year: i32,
    pub category: String,
    /// Plain mechanic names; converted to named-mechanic records on creation.
    #[serde(default)]
    pub mechanics: Vec<String>,
}

/// Partial game update. Only fields present in the payload are written; a
/// present mechanics list wholesale-replaces the stored one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateGameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<Vec<String>>,
}

impl UpdateGameRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.category.is_none()
            && self.mechanics.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListGamesQuery {
    /// Inclusive lower bound on the release year.
    pub min_year: Option<i32>,
    /// Case-insensitive title search.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddToShelfRequest {
    pub user_id: String,
    pub game_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordMatchRequest {
    pub game_id: String,
    #[serde(default)]
    pub player_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
    /// Defaults to the server clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRatingRequest {
    pub user_id: String,
    pub game_id: String,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PopularGamesQuery {
    pub game_id: Option<String>,
}
