pub mod errors;
pub mod game_repository;
pub mod match_repository;
pub mod rating_repository;
pub mod user_repository;

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Unique-index violations surface as write errors with code 11000.
pub(crate) fn is_duplicate_key_error(error: &Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}
