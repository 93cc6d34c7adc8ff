//! Main store implementation.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, info};

use sensorgw_types::{CompareOp, Field, ReadingInput, SensorReading, SortOrder};

use crate::error::{Error, Result};
use crate::queries::{READING_COLUMNS, ReadingFilter};
use crate::schema;

/// Default retention interval in days.
///
/// Weather data is only needed for 24 hours; the sweep's callers use
/// this unless configured otherwise.
pub const DEFAULT_RETENTION_DAYS: i64 = 1;

/// SQLite-based store for weather-station sensor readings.
pub struct SensorStore {
    conn: Connection,
}

impl SensorStore {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;

        // WAL mode for better performance
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        // Initialize schema
        schema::initialize(&conn)?;

        Ok(Self { conn })
    }

    /// Open the default database location.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_db_path())
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // === Query operations ===

    /// Query readings matching an exact-equality filter.
    ///
    /// Results come back in storage order, capped at
    /// [`QUERY_LIMIT`](crate::QUERY_LIMIT) rows. An empty filter returns
    /// an arbitrary 20 records.
    pub fn query(&self, filter: &ReadingFilter) -> Result<Vec<SensorReading>> {
        let (sql, params) = filter.build_sql();

        debug!("Executing query: {}", sql);

        let params_ref: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let readings = stmt
            .query_map(params_ref.as_slice(), map_reading)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(readings)
    }

    /// Get the single first reading for a room, ordered by `field`.
    ///
    /// The field and order are closed enumerations, so an unknown column
    /// name fails when the caller parses it rather than being folded
    /// silently into the query.
    pub fn find_ordered(
        &self,
        room: &str,
        field: Field,
        order: SortOrder,
    ) -> Result<Option<SensorReading>> {
        let sql = format!(
            "SELECT {} FROM readings WHERE room = ? ORDER BY {} {} LIMIT 1",
            READING_COLUMNS,
            field.as_column(),
            order.as_sql()
        );

        let reading = self
            .conn
            .prepare(&sql)?
            .query_row([room], map_reading)
            .optional()?;

        Ok(reading)
    }

    /// Get the most recent reading for a room.
    pub fn latest(&self, room: &str) -> Result<Option<SensorReading>> {
        self.find_ordered(room, Field::InsertDateTime, SortOrder::Desc)
    }

    /// Query readings with a comparison predicate `field op value`.
    ///
    /// The predicate is assembled from the closed [`Field`] and
    /// [`CompareOp`] enumerations and the value is bound as a statement
    /// parameter; no caller-supplied string reaches the SQL text.
    pub fn find_compared(
        &self,
        field: Field,
        op: CompareOp,
        value: impl rusqlite::ToSql,
    ) -> Result<Vec<SensorReading>> {
        let sql = format!(
            "SELECT {} FROM readings WHERE {} {} ?",
            READING_COLUMNS,
            field.as_column(),
            op.as_sql()
        );

        debug!("Executing query: {}", sql);

        let mut stmt = self.conn.prepare(&sql)?;
        let readings = stmt
            .query_map([&value], map_reading)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(readings)
    }

    /// Count stored readings, optionally for a single room.
    pub fn count(&self, room: Option<&str>) -> Result<u64> {
        let count: i64 = match room {
            Some(room) => self.conn.query_row(
                "SELECT COUNT(*) FROM readings WHERE room = ?",
                [room],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM readings", [], |row| row.get(0))?,
        };

        Ok(count as u64)
    }

    // === Write operations ===

    /// Save a reading, assigning the insert timestamp server-side.
    ///
    /// The insert runs inside a transaction. On any persistence failure
    /// the transaction is rolled back, exactly one critical log record is
    /// emitted, and `false` is returned; errors never propagate past the
    /// store boundary from this method. Callers must check the result.
    pub fn save(&self, input: &ReadingInput) -> bool {
        match self.try_save(input) {
            Ok(id) => {
                debug!("Saved reading {} for room {}", id, input.room);
                true
            }
            Err(e) => {
                error!(
                    operation = "SensorStore::save",
                    error = %e,
                    "Record save failed"
                );
                false
            }
        }
    }

    fn try_save(&self, input: &ReadingInput) -> Result<i64> {
        // Dropping an uncommitted transaction rolls it back.
        let tx = self.conn.unchecked_transaction()?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        tx.execute(
            "INSERT INTO readings (room, humidity, temperature, station_id,
             battery_status, insert_date_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                input.room,
                input.humidity,
                input.temperature,
                input.station_id,
                input.battery_status,
                now,
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(id)
    }

    /// Delete readings whose `date_field` is at or before
    /// now − `interval_days` days.
    ///
    /// The sweep runs as one batched delete in a single transaction and
    /// returns the number of rows removed. Errors propagate to the
    /// caller.
    pub fn delete_older_than(&self, date_field: Field, interval_days: i64) -> Result<usize> {
        let cutoff = OffsetDateTime::now_utc() - Duration::days(interval_days);

        let tx = self.conn.unchecked_transaction()?;
        let deleted = tx.execute(
            &format!(
                "DELETE FROM readings WHERE {} <= ?",
                date_field.as_column()
            ),
            [cutoff.unix_timestamp()],
        )?;
        tx.commit()?;

        info!("Retention sweep removed {} readings", deleted);
        Ok(deleted)
    }
}

fn map_reading(row: &rusqlite::Row<'_>) -> rusqlite::Result<SensorReading> {
    let insert_date_time = OffsetDateTime::from_unix_timestamp(row.get(6)?).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    Ok(SensorReading {
        id: row.get(0)?,
        room: row.get(1)?,
        humidity: row.get(2)?,
        temperature: row.get(3)?,
        station_id: row.get(4)?,
        battery_status: row.get(5)?,
        insert_date_time,
    })
}
