#[derive(Debug)]
pub enum MatchRepositoryError {
    Serialization(String),
    Database(String),
}

impl std::fmt::Display for MatchRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            MatchRepositoryError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for MatchRepositoryError {}
