use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One user's evaluation of one game. Immutable once persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rating {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub game_id: ObjectId,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Rating {
    pub const MIN_SCORE: i32 = 1;
    pub const MAX_SCORE: i32 = 5;

    pub fn new(user_id: ObjectId, game_id: ObjectId, score: i32, comment: Option<String>) -> Self {
        Rating {
            id: ObjectId::new(),
            user_id,
            game_id,
            score,
            comment,
        }
    }
}
