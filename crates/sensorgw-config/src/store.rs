//! Dotted-path configuration store.

use std::path::Path;

use toml::{Table, Value};
use tracing::debug;

use crate::error::ConfigError;

/// Shortest dotted path the store resolves.
pub const MIN_KEY_DEPTH: usize = 2;
/// Deepest dotted path the store resolves.
pub const MAX_KEY_DEPTH: usize = 4;

/// In-memory nested configuration tree with dotted-path access.
///
/// The tree is loaded exactly once at construction and lives for the
/// lifetime of the instance. Lookups and updates address values by
/// dotted paths of depth 2 to 4 (`section.key`, up to
/// `section.sub.sub.key`); paths outside that range resolve to nothing
/// rather than silently defaulting.
pub struct ConfigStore {
    tree: Table,
}

impl ConfigStore {
    /// Load the configuration tree from a TOML file.
    ///
    /// Failure to read or parse the file is fatal to construction.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let tree: Table = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(Self { tree })
    }

    /// Wrap an already-loaded tree.
    ///
    /// This is the injection seam for callers that obtain their
    /// configuration from somewhere other than a file.
    pub fn from_table(tree: Table) -> Self {
        Self { tree }
    }

    /// Look up a value by dotted path.
    ///
    /// Only paths of length 2, 3, or 4 are resolvable. Returns `None`
    /// when any level is absent or the path length is out of range.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let segments: Vec<&str> = key.split('.').collect();
        if !(MIN_KEY_DEPTH..=MAX_KEY_DEPTH).contains(&segments.len()) {
            return None;
        }

        let mut current = self.tree.get(segments[0])?;
        for segment in &segments[1..] {
            current = current.as_table()?.get(*segment)?;
        }
        Some(current)
    }

    /// Update the value at a dotted path.
    ///
    /// The update applies only when the key already resolves; missing
    /// keys are never created. Returns whether the update was applied.
    pub fn set(&mut self, key: &str, value: Value) -> bool {
        if self.get(key).is_none() {
            return false;
        }

        let segments: Vec<&str> = key.split('.').collect();
        let mut table = &mut self.tree;
        for segment in &segments[..segments.len() - 1] {
            table = match table.get_mut(*segment).and_then(Value::as_table_mut) {
                Some(t) => t,
                None => return false,
            };
        }
        table.insert(segments[segments.len() - 1].to_string(), value);
        true
    }

    /// The full loaded tree.
    pub fn all(&self) -> &Table {
        &self.tree
    }

    /// Persist the current tree back to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self.tree)?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Write {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tree() -> Table {
        toml::from_str(
            r#"
            [database.params]
            dbname = "sensors"
            port = 5432

            [alerts.thresholds.kitchen]
            humidity = 5
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_get_depth_two_returns_subtree() {
        let store = ConfigStore::from_table(test_tree());
        let params = store.get("database.params").unwrap();
        assert!(params.is_table());
        assert_eq!(
            params.as_table().unwrap().get("dbname"),
            Some(&Value::String("sensors".to_string()))
        );
    }

    #[test]
    fn test_get_depth_three() {
        let store = ConfigStore::from_table(test_tree());
        assert_eq!(
            store.get("database.params.dbname"),
            Some(&Value::String("sensors".to_string()))
        );
    }

    #[test]
    fn test_get_depth_four() {
        let store = ConfigStore::from_table(test_tree());
        assert_eq!(
            store.get("alerts.thresholds.kitchen.humidity"),
            Some(&Value::Integer(5))
        );
    }

    #[test]
    fn test_get_missing_path() {
        let store = ConfigStore::from_table(test_tree());
        assert!(store.get("x.y.z").is_none());
        assert!(store.get("database.params.missing").is_none());
    }

    #[test]
    fn test_get_depth_out_of_range() {
        let store = ConfigStore::from_table(test_tree());
        // Length 1 and length 5 are outside the supported range, even
        // when a prefix of the path exists.
        assert!(store.get("database").is_none());
        assert!(store.get("alerts.thresholds.kitchen.humidity.extra").is_none());
    }

    #[test]
    fn test_get_scalar_mid_path() {
        let store = ConfigStore::from_table(test_tree());
        // dbname is a scalar; descending through it misses.
        assert!(store.get("database.params.dbname.extra").is_none());
    }

    #[test]
    fn test_set_updates_existing_key() {
        let mut store = ConfigStore::from_table(test_tree());
        assert!(store.set("database.params.port", Value::Integer(9)));
        assert_eq!(store.get("database.params.port"), Some(&Value::Integer(9)));
    }

    #[test]
    fn test_set_missing_key_is_a_noop() {
        let mut store = ConfigStore::from_table(test_tree());
        let before = store.all().clone();

        assert!(!store.set("database.params.host", Value::String("x".into())));
        assert!(!store.set("brand.new.key", Value::Integer(1)));

        assert_eq!(store.all(), &before);
    }

    #[test]
    fn test_set_depth_out_of_range_is_a_noop() {
        let mut store = ConfigStore::from_table(test_tree());
        assert!(!store.set("database", Value::Integer(1)));
        assert!(store.get("database.params.dbname").is_some());
    }

    #[test]
    fn test_all_returns_full_tree() {
        let store = ConfigStore::from_table(test_tree());
        assert!(store.all().contains_key("database"));
        assert!(store.all().contains_key("alerts"));
    }

    #[test]
    fn test_load_nonexistent() {
        let result = ConfigStore::load("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");
        std::fs::write(&config_path, "this is not valid { toml").unwrap();

        let result = ConfigStore::load(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut store = ConfigStore::from_table(test_tree());
        store.set("database.params.dbname", Value::String("weather".into()));
        store.save(&config_path).unwrap();

        let loaded = ConfigStore::load(&config_path).unwrap();
        assert_eq!(
            loaded.get("database.params.dbname"),
            Some(&Value::String("weather".to_string()))
        );
        assert_eq!(
            loaded.get("alerts.thresholds.kitchen.humidity"),
            Some(&Value::Integer(5))
        );
    }
}
