use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A named mechanic embedded in a game document. Mechanics created from a
/// plain name carry no description.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Mechanic {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Mechanic {
    pub fn named(name: &str) -> Self {
        Mechanic {
            name: name.to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub year: i32,
    pub category: String,
    pub mechanics: Vec<Mechanic>,
}

impl Game {
    pub fn new(title: String, year: i32, category: String, mechanic_names: Vec<String>) -> Self {
        Game {
            id: ObjectId::new(),
            title,
            year,
            category,
            mechanics: mechanic_names.iter().map(|n| Mechanic::named(n)).collect(),
        }
    }
}
