use std::fmt;

#[derive(Debug)]
pub enum GameServiceError {
    ValidationError(String),
    InvalidId(String),
    GameNotFound,
    TitleAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::InvalidId(id) => write!(f, "Invalid identifier: {}", id),
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::TitleAlreadyExists => {
                write!(f, "A game with this title already exists")
            }
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}
