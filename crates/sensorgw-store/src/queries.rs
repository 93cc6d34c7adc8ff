//! Query builder for stored sensor readings.
//!
//! [`ReadingFilter`] expresses an exact-equality conjunction over reading
//! fields, following the builder pattern. All filter methods are optional
//! and can be chained in any order.
//!
//! # Example
//!
//! ```
//! use sensorgw_store::{ReadingFilter, SensorStore};
//!
//! let store = SensorStore::open_in_memory()?;
//!
//! let filter = ReadingFilter::new().room("kitchen").station_id("6126");
//! let readings = store.query(&filter)?;
//! # Ok::<(), sensorgw_store::Error>(())
//! ```

/// Hard cap on the number of rows a filtered query returns.
pub const QUERY_LIMIT: u32 = 20;

/// Column list shared by every SELECT over the readings table.
pub(crate) const READING_COLUMNS: &str =
    "id, room, humidity, temperature, station_id, battery_status, insert_date_time";

/// Exact-equality filter over sensor readings.
///
/// Every supplied field becomes an `AND`-joined equality predicate. The
/// result set is always capped at [`QUERY_LIMIT`] rows in storage order.
/// An empty filter therefore returns an arbitrary 20 records; callers
/// use that for "give me a sample" requests, so it stays.
#[derive(Debug, Default, Clone)]
pub struct ReadingFilter {
    /// Match readings for this room.
    pub room: Option<String>,
    /// Match readings from this station.
    pub station_id: Option<String>,
    /// Match readings with exactly this humidity.
    pub humidity: Option<f64>,
    /// Match readings with exactly this temperature.
    pub temperature: Option<f64>,
    /// Match readings with exactly this battery status.
    pub battery_status: Option<f64>,
}

impl ReadingFilter {
    /// Create an empty filter (matches everything, capped at 20 rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Match readings for the given room.
    pub fn room(mut self, room: &str) -> Self {
        self.room = Some(room.to_string());
        self
    }

    /// Match readings from the given station.
    pub fn station_id(mut self, station_id: &str) -> Self {
        self.station_id = Some(station_id.to_string());
        self
    }

    /// Match readings with exactly the given humidity.
    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Match readings with exactly the given temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Match readings with exactly the given battery status.
    pub fn battery_status(mut self, battery_status: f64) -> Self {
        self.battery_status = Some(battery_status);
        self
    }

    /// Build the SQL WHERE clause and parameters.
    pub(crate) fn build_where(&self) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref room) = self.room {
            conditions.push("room = ?");
            params.push(Box::new(room.clone()));
        }

        if let Some(ref station_id) = self.station_id {
            conditions.push("station_id = ?");
            params.push(Box::new(station_id.clone()));
        }

        if let Some(humidity) = self.humidity {
            conditions.push("humidity = ?");
            params.push(Box::new(humidity));
        }

        if let Some(temperature) = self.temperature {
            conditions.push("temperature = ?");
            params.push(Box::new(temperature));
        }

        if let Some(battery_status) = self.battery_status {
            conditions.push("battery_status = ?");
            params.push(Box::new(battery_status));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (where_clause, params)
    }

    /// Build the full SQL query and its parameters.
    ///
    /// Clause and parameters come from a single `build_where` call so
    /// the two cannot drift apart.
    pub(crate) fn build_sql(&self) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let (where_clause, params) = self.build_where();

        let sql = format!(
            "SELECT {} FROM readings {} LIMIT {}",
            READING_COLUMNS, where_clause, QUERY_LIMIT
        );

        (sql, params)
    }
}
