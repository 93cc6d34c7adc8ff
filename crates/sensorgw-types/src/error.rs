//! Error types for query-reference parsing in sensorgw-types.

use thiserror::Error;

/// Errors that can occur when resolving caller-supplied query strings.
///
/// These indicate caller programming errors (a field, operator, or sort
/// order that does not exist) and must surface rather than be silently
/// swallowed by the store.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The named field is not a column of the readings table.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The comparison operator is not one of =, !=, <, <=, >, >=.
    #[error("Unknown comparison operator: {0}")]
    UnknownOperator(String),

    /// The sort order is not ASC or DESC.
    #[error("Unknown sort order: {0}")]
    UnknownOrder(String),
}

/// Result type alias using sensorgw-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
