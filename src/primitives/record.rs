//! Tabular records, validated stops, and the input boundary.
//!
//! ## Purpose
//!
//! This module defines the shapes data takes at the engine boundary: a
//! [`RecordSet`] of tabular rows produced by whatever ingestion layer the
//! caller uses, and the [`Stop`] extracted from a row once its coordinates
//! have been validated.
//!
//! ## Design notes
//!
//! * **Passthrough**: A row is an ordinary JSON object. The engine never
//!   inspects fields other than `name`, `lat`, and `lon`, and re-emits
//!   every row verbatim inside its assigned group.
//! * **Coercion**: Coordinate values may arrive as JSON numbers or as
//!   numeric strings; both parse, anything else does not.
//! * **Serializable**: Both boundary types round-trip through JSON text.
//!
//! ## Invariants
//!
//! * A constructed [`Stop`] always carries finite `lat` and `lon`.
//! * `RecordSet::columns` is the authoritative header for schema checks.
//!
//! ## Non-goals
//!
//! * This module does not read files or network sources; ingestion
//!   mechanics belong to the caller.
//! * This module does not deduplicate rows or stop names.

// External dependencies
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tabular record: an ordered map of field name to JSON value.
pub type Row = serde_json::Map<String, Value>;

// ============================================================================
// Record Set
// ============================================================================

/// A tabular record set: a column header plus rows.
///
/// The header drives schema validation; individual rows may still lack
/// values for some columns (sparse data), which is tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RecordSet {
    /// Create a record set from an explicit column header and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Create a record set deriving the header from the rows.
    ///
    /// The header is the union of all row keys in first-seen order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    /// The column header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the record set has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// Stop
// ============================================================================

/// A validated delivery stop extracted from one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Opaque identifier from the `name` field (not required unique).
    pub name: String,

    /// Latitude in degrees; always finite.
    pub lat: f64,

    /// Longitude in degrees; always finite.
    pub lon: f64,

    /// Index of the originating row within the record set.
    pub row: usize,
}

impl Stop {
    /// Extract a stop from a row, or `None` when `lat` or `lon` is
    /// missing or does not parse to a finite float.
    pub fn from_row(index: usize, row: &Row) -> Option<Self> {
        let lat = coordinate_value(row.get("lat")?)?;
        let lon = coordinate_value(row.get("lon")?)?;

        let name = match row.get("name") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Some(Self {
            name,
            lat,
            lon,
            row: index,
        })
    }

    /// The stop's raw coordinate pair.
    pub fn position(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

/// Parse a coordinate value from a JSON number or a numeric string.
///
/// Returns `None` for anything non-finite.
fn coordinate_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

