use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod routes;
mod state;

use shared::repositories::game_repository::MongoGameRepository;
use shared::repositories::match_repository::MongoMatchRepository;
use shared::repositories::rating_repository::MongoRatingRepository;
use shared::repositories::user_repository::MongoUserRepository;
use shared::services::game_service::GameService;
use shared::services::match_service::MatchService;
use shared::services::rating_service::RatingService;
use shared::services::report_service::ReportService;
use shared::services::user_service::UserService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env();

    // An unreachable store is fatal; no retries.
    let database = db::connect(&config).await?;

    let game_repository = Arc::new(MongoGameRepository::new(&database));
    let user_repository = Arc::new(MongoUserRepository::new(&database));
    let match_repository = Arc::new(MongoMatchRepository::new(&database));
    let rating_repository = Arc::new(MongoRatingRepository::new(&database));

    let game_service = Arc::new(GameService::new(game_repository.clone()));
    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        game_repository.clone(),
    ));
    let match_service = Arc::new(MatchService::new(
        match_repository.clone(),
        game_repository.clone(),
        user_repository.clone(),
    ));
    let rating_service = Arc::new(RatingService::new(
        rating_repository.clone(),
        user_repository,
        game_repository,
    ));
    let report_service = Arc::new(ReportService::new(match_repository, rating_repository));

    let app_state = state::AppState {
        game_service,
        user_service,
        match_service,
        rating_service,
        report_service,
    };

    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes())
        .merge(routes::users::routes())
        .merge(routes::matches::routes())
        .merge(routes::ratings::routes())
        .merge(routes::reports::routes())
        .layer(cors)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
