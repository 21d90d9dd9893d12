pub mod game_repository_errors;
pub mod match_repository_errors;
pub mod rating_repository_errors;
pub mod user_repository_errors;
