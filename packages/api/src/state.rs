use std::sync::Arc;

use shared::services::game_service::GameService;
use shared::services::match_service::MatchService;
use shared::services::rating_service::RatingService;
use shared::services::report_service::ReportService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub user_service: Arc<UserService>,
    pub match_service: Arc<MatchService>,
    pub rating_service: Arc<RatingService>,
    pub report_service: Arc<ReportService>,
}
