//! Shared types for weather-station sensor readings.
//!
//! This crate provides the data types shared between the persistence
//! layer (sensorgw-store) and the HTTP layer that consumes it.
//!
//! # Features
//!
//! - Reading input and stored-reading structures
//! - Closed enumerations for query fields, comparison operators, and
//!   sort order, with `FromStr` for mapping request strings
//! - Error types for query-reference parsing
//!
//! # Example
//!
//! ```
//! use sensorgw_types::{CompareOp, Field, SortOrder};
//!
//! let field: Field = "temperature".parse()?;
//! let op: CompareOp = ">=".parse()?;
//! assert_eq!(field.as_column(), "temperature");
//! assert_eq!(op.as_sql(), ">=");
//! # Ok::<(), sensorgw_types::ParseError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{CompareOp, Field, ReadingInput, SensorReading, SortOrder};
