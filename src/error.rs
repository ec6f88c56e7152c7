//! Error types shared by the store, services and handlers

use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Result type for chat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving chats and messages
#[derive(Debug, Error)]
pub enum Error {
    /// Chat or message doesn't exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Uniqueness conflict in the store
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Unclassified persistence failure (SQL errors, pool issues, timeouts)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn chat_not_found(id: i64) -> Self {
        Error::NotFound(format!("chat {} does not exist", id))
    }
}

/// Convert tokio-postgres errors to chat errors
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            if db_error.code() == &SqlState::UNIQUE_VIOLATION {
                return Error::AlreadyExists(db_error.message().to_string());
            }

            return Error::Storage(format!("{}: {}", db_error.code().code(), db_error.message()));
        }

        Error::Storage(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::Storage(format!("pool: {}", err))
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Storage(format!("pool build: {}", err))
    }
}
