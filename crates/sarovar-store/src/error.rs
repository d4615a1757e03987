//! # Storage Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Booking reference already taken
    #[error("Booking already exists: {id}")]
    DuplicateBooking { id: String },

    #[error("Invalid record: {message}")]
    Invalid { message: String },
}

impl StorageError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
