use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded play of one game by a set of players. Immutable once persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub played_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub game_id: ObjectId,
    pub player_ids: Vec<ObjectId>,
    /// The winner is not required to be one of the players.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<ObjectId>,
}

impl Match {
    pub fn new(
        game_id: ObjectId,
        player_ids: Vec<ObjectId>,
        location: Option<String>,
        winner_id: Option<ObjectId>,
        played_at: Option<DateTime<Utc>>,
    ) -> Self {
        Match {
            id: ObjectId::new(),
            played_at: played_at.unwrap_or_else(Utc::now),
            location,
            game_id,
            player_ids,
            winner_id,
        }
    }
}
