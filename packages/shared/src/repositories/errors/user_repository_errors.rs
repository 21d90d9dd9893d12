#[derive(Debug)]
pub enum UserRepositoryError {
    NotFound,
    DuplicateEmail,
    Database(String),
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::NotFound => write!(f, "User not found"),
            UserRepositoryError::DuplicateEmail => write!(f, "A user with this email already exists"),
            UserRepositoryError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
