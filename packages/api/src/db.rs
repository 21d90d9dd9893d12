use anyhow::Context;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::config::Config;
use shared::models::game::Game;
use shared::models::user::User;
use shared::repositories::game_repository::GAMES_COLLECTION;
use shared::repositories::user_repository::USERS_COLLECTION;

/// Connects to the store and prepares the unique indexes. Any failure here
/// aborts startup.
pub async fn connect(config: &Config) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .context("invalid MongoDB connection string")?;
    let database = client.database(&config.mongo_db_name);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB is unreachable")?;
    info!("Connected to database {}", config.mongo_db_name);

    ensure_indexes(&database).await?;
    Ok(database)
}

/// Title and email uniqueness live in the store's index layer; writes are
/// never pre-checked in process.
async fn ensure_indexes(database: &Database) -> anyhow::Result<()> {
    let unique = IndexOptions::builder().unique(true).build();

    let games: Collection<Game> = database.collection(GAMES_COLLECTION);
    games
        .create_index(
            IndexModel::builder()
                .keys(doc! { "title": 1 })
                .options(unique.clone())
                .build(),
        )
        .await
        .context("failed to create unique title index")?;

    let users: Collection<User> = database.collection(USERS_COLLECTION);
    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique)
                .build(),
        )
        .await
        .context("failed to create unique email index")?;

    Ok(())
}
