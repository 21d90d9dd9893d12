#[derive(Debug)]
pub enum GameRepositoryError {
    NotFound,
    DuplicateTitle,
    Database(String),
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::NotFound => write!(f, "Game not found"),
            GameRepositoryError::DuplicateTitle => write!(f, "A game with this title already exists"),
            GameRepositoryError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for GameRepositoryError {}
