//! Error types for sensorgw-store.

use std::path::PathBuf;

/// Result type for sensorgw-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sensorgw-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error from SQLite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create database directory.
    #[error("Failed to create database directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Caller-supplied query reference did not resolve.
    #[error("Query error: {0}")]
    Query(#[from] sensorgw_types::ParseError),
}
