// src/error.rs

//! Error types for the recipe store
//!
//! Every failure surfaces as one [`Error`], and [`Error::kind`] folds the
//! variants into the three caller-visible classes: bad input, storage
//! failure, and malformed search syntax. A missing record is not an error;
//! lookups return `Ok(None)` and deletes return `Ok(false)`.

use crate::recipe::ValidationError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for recipe store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the recipe store
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid recipe: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not assign a unique slug after {attempts} attempts")]
    SlugExhausted { attempts: u32 },

    #[error("Corrupt recipe snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid search query: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Caller-facing classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input violates recipe constraints; retrying will not help
    Validation,
    /// The storage medium failed (I/O, constraint, transaction, corruption)
    Storage,
    /// The search query is not valid full-text syntax
    Query,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Query(_) => ErrorKind::Query,
            Error::Database(_)
            | Error::SlugExhausted { .. }
            | Error::Snapshot(_)
            | Error::Io(_)
            | Error::Config(_) => ErrorKind::Storage,
        }
    }

    /// Whether the same call may succeed if repeated
    ///
    /// True when another connection held the write lock past the busy timeout.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}
