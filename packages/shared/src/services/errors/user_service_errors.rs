use std::fmt;

#[derive(Debug)]
pub enum UserServiceError {
    ValidationError(String),
    InvalidId(String),
    UserNotFound,
    GameNotFound,
    EmailAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UserServiceError::InvalidId(id) => write!(f, "Invalid identifier: {}", id),
            UserServiceError::UserNotFound => write!(f, "User not found"),
            UserServiceError::GameNotFound => write!(f, "Game not found"),
            UserServiceError::EmailAlreadyExists => {
                write!(f, "A user with this email already exists")
            }
            UserServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UserServiceError {}
