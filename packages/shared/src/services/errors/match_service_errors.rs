use std::fmt;

#[derive(Debug)]
pub enum MatchServiceError {
    InvalidId(String),
    GameNotFound,
    PlayerNotFound,
    WinnerNotFound,
    RepositoryError(String),
}

impl fmt::Display for MatchServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchServiceError::InvalidId(id) => write!(f, "Invalid identifier: {}", id),
            MatchServiceError::GameNotFound => write!(f, "Game not found"),
            MatchServiceError::PlayerNotFound => write!(f, "One or more players were not found"),
            MatchServiceError::WinnerNotFound => write!(f, "Winner not found"),
            MatchServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for MatchServiceError {}
