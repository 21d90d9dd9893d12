use std::fmt;

#[derive(Debug)]
pub enum RatingServiceError {
    ValidationError(String),
    InvalidId(String),
    UserNotFound,
    GameNotFound,
    RepositoryError(String),
}

impl fmt::Display for RatingServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RatingServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RatingServiceError::InvalidId(id) => write!(f, "Invalid identifier: {}", id),
            RatingServiceError::UserNotFound => write!(f, "User not found"),
            RatingServiceError::GameNotFound => write!(f, "Game not found"),
            RatingServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RatingServiceError {}
