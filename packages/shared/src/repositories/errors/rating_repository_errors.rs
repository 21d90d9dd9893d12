#[derive(Debug)]
pub enum RatingRepositoryError {
    Serialization(String),
    Database(String),
}

impl std::fmt::Display for RatingRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            RatingRepositoryError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for RatingRepositoryError {}
