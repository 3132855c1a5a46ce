//! Stop collection from tabular rows.
//!
//! ## Purpose
//!
//! This module turns a schema-validated record set into the in-memory
//! stop collection used for clustering. Rows whose `lat` or `lon` is
//! missing or does not parse to a finite float are excluded silently —
//! sparse location data degrades the batch, it does not reject it.
//!
//! ## Invariants
//!
//! * `stops.len() + dropped_rows == records.len()`.
//! * Stops keep their originating row index and input order.
//!
//! ## Non-goals
//!
//! * This module performs no I/O; ingestion mechanics are the caller's
//!   concern.
//! * This module does not check the schema (done by the validator first).

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::primitives::record::{RecordSet, Stop};

// ============================================================================
// Stop Collection
// ============================================================================

/// The validated stop collection for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedStops {
    /// Stops with parseable, finite coordinates, in input order.
    pub stops: Vec<Stop>,

    /// Rows excluded for unparseable coordinates.
    pub dropped_rows: usize,
}

/// Collect the valid stops from a record set.
///
/// Never fails: per-row coordinate problems only shrink the collection.
pub fn collect_stops(records: &RecordSet) -> LoadedStops {
    let mut stops = Vec::with_capacity(records.len());
    let mut dropped_rows = 0;

    for (index, row) in records.rows().iter().enumerate() {
        match Stop::from_row(index, row) {
            Some(stop) => stops.push(stop),
            None => {
                trace!("row {index} dropped: missing or unparseable coordinates");
                dropped_rows += 1;
            }
        }
    }

    debug!(
        "collected {} valid stops ({} rows dropped)",
        stops.len(),
        dropped_rows
    );
    LoadedStops {
        stops,
        dropped_rows,
    }
}
