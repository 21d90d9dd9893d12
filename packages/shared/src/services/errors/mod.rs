pub mod game_service_errors;
pub mod match_service_errors;
pub mod rating_service_errors;
pub mod report_service_errors;
pub mod user_service_errors;
