//! Persistence layer for weather-station sensor readings.
//!
//! This crate provides SQLite-based storage for readings reported by
//! weather stations: filtered lookup, ordered single-record lookup,
//! comparison queries, transactional save, and a retention sweep.
//!
//! # Features
//!
//! - Store readings with server-assigned timestamps
//! - Exact-equality queries capped at 20 rows
//! - Ordered lookup of the first/last reading per room
//! - Comparison predicates built from closed enumerations
//! - Age-based bulk deletion for retention
//!
//! # Example
//!
//! ```no_run
//! use sensorgw_store::{ReadingFilter, SensorStore};
//!
//! let store = SensorStore::open_default()?;
//!
//! // Query readings for a room
//! let filter = ReadingFilter::new().room("kitchen");
//! let readings = store.query(&filter)?;
//! # Ok::<(), sensorgw_store::Error>(())
//! ```

mod error;
mod queries;
mod schema;
mod store;

pub use error::{Error, Result};
pub use queries::{QUERY_LIMIT, ReadingFilter};
pub use store::{DEFAULT_RETENTION_DAYS, SensorStore};

// Re-export the shared types callers need to drive the store.
pub use sensorgw_types::{CompareOp, Field, ReadingInput, SensorReading, SortOrder};

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/sensorgw/data.db`
/// - macOS: `~/Library/Application Support/sensorgw/data.db`
/// - Windows: `C:\Users\<user>\AppData\Local\sensorgw\data.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("sensorgw")
        .join("data.db")
}
