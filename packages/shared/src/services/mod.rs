pub mod errors;
pub mod game_service;
pub mod match_service;
pub mod rating_service;
pub mod report_service;
pub mod user_service;
