use std::fmt;

#[derive(Debug)]
pub enum ReportServiceError {
    InvalidId(String),
    RepositoryError(String),
}

impl fmt::Display for ReportServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportServiceError::InvalidId(id) => write!(f, "Invalid identifier: {}", id),
            ReportServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ReportServiceError {}
