use std::env;

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

use shared::models::game::{Game, Mechanic};
use shared::models::game_match::Match;
use shared::models::rating::Rating;
use shared::models::user::User;
use shared::repositories::game_repository::GAMES_COLLECTION;
use shared::repositories::match_repository::MATCHES_COLLECTION;
use shared::repositories::rating_repository::RATINGS_COLLECTION;
use shared::repositories::user_repository::USERS_COLLECTION;

fn mechanic(name: &str, description: &str) -> Mechanic {
    Mechanic {
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn demo_games() -> Vec<Game> {
    let mut games = vec![
        Game::new("Catan".to_string(), 1995, "Strategy".to_string(), vec![]),
        Game::new("Ticket to Ride".to_string(), 2004, "Family".to_string(), vec![]),
        Game::new("Pandemic".to_string(), 2008, "Cooperative".to_string(), vec![]),
        Game::new("Wingspan".to_string(), 2019, "Light Strategy".to_string(), vec![]),
        Game::new("Terraforming Mars".to_string(), 2016, "Heavy Strategy".to_string(), vec![]),
    ];
    games[0].mechanics = vec![
        mechanic("Trading", "Resource exchange between players"),
        mechanic("Dice Rolling", "Drives resource production"),
    ];
    games[1].mechanics = vec![
        mechanic("Set Collection", "Collect cards of matching colors"),
        mechanic("Route Building", "Connect cities across the map"),
    ];
    games[2].mechanics = vec![
        mechanic("Action Points", "Four actions per turn"),
        mechanic("Hand Management", "City cards fund cures"),
    ];
    games[3].mechanics = vec![
        mechanic("Engine Building", "Each bird improves later turns"),
        mechanic("Card Drafting", "Birds with chained powers"),
    ];
    games[4].mechanics = vec![
        mechanic("Resource Management", "Cubes for every production track"),
        mechanic("Card Drafting", "Pick project cards each generation"),
    ];
    games
}

fn demo_users() -> Vec<User> {
    vec![
        User::new("Alice Silva".to_string(), "alice@example.com".to_string()),
        User::new("Bruno Souza".to_string(), "bruno@example.com".to_string()),
        User::new("Carlos Mendes".to_string(), "carlos@example.com".to_string()),
        User::new("Diana Costa".to_string(), "diana@example.com".to_string()),
    ]
}

async fn wipe(database: &Database) -> anyhow::Result<()> {
    for name in [
        MATCHES_COLLECTION,
        RATINGS_COLLECTION,
        USERS_COLLECTION,
        GAMES_COLLECTION,
    ] {
        let collection: Collection<mongodb::bson::Document> = database.collection(name);
        collection
            .delete_many(doc! {})
            .await
            .with_context(|| format!("failed to clear {}", name))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mongo_url =
        env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = env::var("MONGO_DB_NAME").unwrap_or_else(|_| "boardgames".to_string());

    let client = Client::with_uri_str(&mongo_url)
        .await
        .context("invalid MongoDB connection string")?;
    let database = client.database(&db_name);

    info!("Clearing existing data");
    wipe(&database).await?;

    let games = demo_games();
    let games_collection: Collection<Game> = database.collection(GAMES_COLLECTION);
    games_collection.insert_many(&games).await?;
    info!("Inserted {} games", games.len());

    let mut users = demo_users();
    // Alice shelves Catan twice on purpose; duplicates are allowed.
    users[0].shelf = vec![games[0].id, games[0].id, games[3].id];
    users[1].shelf = vec![games[1].id, games[2].id];
    users[2].shelf = vec![games[4].id];
    let users_collection: Collection<User> = database.collection(USERS_COLLECTION);
    users_collection.insert_many(&users).await?;
    info!("Inserted {} users", users.len());

    let matches = vec![
        Match::new(
            games[0].id,
            vec![users[0].id, users[1].id, users[2].id],
            Some("Alice's place".to_string()),
            Some(users[0].id),
            None,
        ),
        Match::new(
            games[0].id,
            vec![users[0].id, users[1].id],
            None,
            Some(users[1].id),
            None,
        ),
        Match::new(
            games[0].id,
            vec![users[1].id, users[2].id],
            None,
            Some(users[2].id),
            None,
        ),
        Match::new(
            games[3].id,
            vec![users[0].id, users[3].id],
            Some("game night".to_string()),
            Some(users[3].id),
            None,
        ),
    ];
    let matches_collection: Collection<Match> = database.collection(MATCHES_COLLECTION);
    matches_collection.insert_many(&matches).await?;
    info!("Inserted {} matches", matches.len());

    let ratings = vec![
        Rating::new(users[0].id, games[0].id, 4, Some("A classic".to_string())),
        Rating::new(users[1].id, games[0].id, 5, None),
        Rating::new(users[2].id, games[4].id, 5, Some("Long but rewarding".to_string())),
        Rating::new(users[3].id, games[1].id, 3, None),
    ];
    let ratings_collection: Collection<Rating> = database.collection(RATINGS_COLLECTION);
    ratings_collection.insert_many(&ratings).await?;
    info!("Inserted {} ratings", ratings.len());

    info!("Seeding complete");
    Ok(())
}
