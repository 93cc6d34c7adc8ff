//! Nested-key configuration store for the weather-station gateway.
//!
//! Loads a TOML document once at startup and exposes dotted-path access
//! to it: `get("database.params.dbname")`, `set(...)` for existing keys,
//! and an explicit `save` for durability.
//!
//! # Example
//!
//! ```no_run
//! use sensorgw_config::ConfigStore;
//!
//! let config = ConfigStore::load(sensorgw_config::default_config_path())?;
//! if let Some(name) = config.get("database.params.dbname") {
//!     println!("database: {}", name);
//! }
//! # Ok::<(), sensorgw_config::ConfigError>(())
//! ```

mod error;
mod store;

pub use error::ConfigError;
pub use store::{ConfigStore, MAX_KEY_DEPTH, MIN_KEY_DEPTH};

// Callers build and inspect trees in terms of the toml value model.
pub use toml::{Table, Value};

/// Default configuration file path.
pub fn default_config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("sensorgw")
        .join("config.toml")
}
