use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use shared::models::responses::ErrorResponse;
use shared::services::errors::{
    game_service_errors::GameServiceError, match_service_errors::MatchServiceError,
    rating_service_errors::RatingServiceError, report_service_errors::ReportServiceError,
    user_service_errors::UserServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    UserService(UserServiceError),
    MatchService(MatchServiceError),
    RatingService(RatingServiceError),
    ReportService(ReportServiceError),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<MatchServiceError> for ApiError {
    fn from(error: MatchServiceError) -> Self {
        ApiError::MatchService(error)
    }
}

impl From<RatingServiceError> for ApiError {
    fn from(error: RatingServiceError) -> Self {
        ApiError::RatingService(error)
    }
}

impl From<ReportServiceError> for ApiError {
    fn from(error: ReportServiceError) -> Self {
        ApiError::ReportService(error)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(GameServiceError::ValidationError(_))
            | ApiError::GameService(GameServiceError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::TitleAlreadyExists) => StatusCode::CONFLICT,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::UserService(UserServiceError::ValidationError(_))
            | ApiError::UserService(UserServiceError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::UserService(
                UserServiceError::UserNotFound | UserServiceError::GameNotFound,
            ) => StatusCode::NOT_FOUND,
            ApiError::UserService(UserServiceError::EmailAlreadyExists) => StatusCode::CONFLICT,
            ApiError::UserService(UserServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::MatchService(MatchServiceError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::MatchService(
                MatchServiceError::GameNotFound
                | MatchServiceError::PlayerNotFound
                | MatchServiceError::WinnerNotFound,
            ) => StatusCode::NOT_FOUND,
            ApiError::MatchService(MatchServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::RatingService(RatingServiceError::ValidationError(_))
            | ApiError::RatingService(RatingServiceError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::RatingService(
                RatingServiceError::UserNotFound | RatingServiceError::GameNotFound,
            ) => StatusCode::NOT_FOUND,
            ApiError::RatingService(RatingServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::ReportService(ReportServiceError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::ReportService(ReportServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::GameService(e) => e.to_string(),
            ApiError::UserService(e) => e.to_string(),
            ApiError::MatchService(e) => e.to_string(),
            ApiError::RatingService(e) => e.to_string(),
            ApiError::ReportService(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
