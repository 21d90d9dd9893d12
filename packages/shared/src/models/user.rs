use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// Ordered game references. Entries are appended one at a time and never
    /// removed; the same game may appear more than once.
    #[serde(default)]
    pub shelf: Vec<ObjectId>,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        User {
            id: ObjectId::new(),
            name,
            email,
            shelf: Vec::new(),
        }
    }
}
