//! Core data types for weather-station sensor readings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ParseError;

/// A sensor observation as submitted by a station.
///
/// The insert timestamp is deliberately absent: the store assigns it
/// server-side at save time and never accepts a client-supplied value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingInput {
    /// Room the station reports for.
    pub room: String,
    /// Relative humidity percentage.
    pub humidity: f64,
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Reporting station identifier.
    pub station_id: String,
    /// Battery level, if the station reports one.
    #[serde(default)]
    pub battery_status: Option<f64>,
}

/// A sensor reading stored in the database.
///
/// Readings are immutable after insert and removed only by the
/// retention sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    /// Database row ID.
    pub id: i64,
    /// Room the station reports for.
    pub room: String,
    /// Relative humidity percentage.
    pub humidity: f64,
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Reporting station identifier.
    pub station_id: String,
    /// Battery level, if the station reported one.
    pub battery_status: Option<f64>,
    /// When the store accepted this reading (server-assigned).
    #[serde(with = "time::serde::rfc3339")]
    pub insert_date_time: OffsetDateTime,
}

/// Columns of the readings table that queries may reference.
///
/// SQL text is assembled only from [`Field::as_column`]; caller-supplied
/// strings reach this enum through `FromStr`, where unknown names fail
/// with [`ParseError::UnknownField`] instead of being interpolated into
/// a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Room,
    Humidity,
    Temperature,
    StationId,
    BatteryStatus,
    InsertDateTime,
}

impl Field {
    /// The column name in the readings table.
    pub fn as_column(self) -> &'static str {
        match self {
            Field::Room => "room",
            Field::Humidity => "humidity",
            Field::Temperature => "temperature",
            Field::StationId => "station_id",
            Field::BatteryStatus => "battery_status",
            Field::InsertDateTime => "insert_date_time",
        }
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(Field::Room),
            "humidity" => Ok(Field::Humidity),
            "temperature" => Ok(Field::Temperature),
            "station_id" => Ok(Field::StationId),
            "battery_status" => Ok(Field::BatteryStatus),
            "insert_date_time" => Ok(Field::InsertDateTime),
            other => Err(ParseError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_column())
    }
}

/// Comparison operators allowed in dynamic predicates.
///
/// A closed set resolved to fixed SQL fragments; the compared value is
/// always bound as a statement parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// The SQL operator fragment.
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(CompareOp::Eq),
            "!=" | "<>" => Ok(CompareOp::Ne),
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Le),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Ge),
            other => Err(ParseError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Sort direction for ordered lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The SQL keyword.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(ParseError::UnknownOrder(s.to_string()))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
