//! Output types for stop-to-vehicle assignment.
//!
//! ## Purpose
//!
//! This module defines [`ClusterAssignment`], the result of one engine
//! invocation: the ordered vehicle → stops mapping plus batch summary
//! metadata. It also owns the binder that attaches partitioned groups to
//! vehicle identifiers.
//!
//! ## Design notes
//!
//! * **Positional binding**: Cluster `i` goes to the `i`-th fleet
//!   vehicle. Cluster indices carry no meaning of their own; the binding
//!   is not based on group size, compactness, or geography.
//! * **Payload preservation**: Rows are carried verbatim into their
//!   assigned group — only the grouping changes, never the record.
//! * **Serializable**: The whole structure is a flat mapping of string
//!   keys to lists of flat records and round-trips through JSON text.
//!
//! ## Invariants
//!
//! * Every valid stop's row appears in exactly one group.
//! * The mapping holds exactly the fleet's identifiers, in fleet order;
//!   vehicles at index `≥ clusters_used` map to empty lists.
//! * Within a group, rows keep their input order.
//!
//! ## Non-goals
//!
//! * This module does not order stops into routes.
//! * This module does not persist anything; callers own storage.

// External dependencies
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::kmeans::Partition;
use crate::engine::loader::LoadedStops;
use crate::primitives::record::{RecordSet, Row};

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one assignment: vehicle → stops plus summary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    /// Ordered mapping from vehicle identifier to its assigned rows.
    pub assignments: IndexMap<String, Vec<Row>>,

    /// Number of groups actually produced (0 when no stops were valid).
    pub clusters_used: usize,

    /// Stops that entered clustering.
    pub valid_stops: usize,

    /// Rows excluded for unparseable coordinates.
    pub dropped_rows: usize,

    /// Final within-group squared-distance objective, in normalized
    /// space. `None` when clustering was skipped.
    pub inertia: Option<f64>,
}

impl ClusterAssignment {
    // ========================================================================
    // Binder
    // ========================================================================

    /// Bind partitioned groups to vehicles in fleet order.
    ///
    /// Vehicles beyond the produced group count receive empty lists;
    /// fleet capacity exceeding demand is expected, not an error.
    pub(crate) fn bind(
        records: &RecordSet,
        loaded: &LoadedStops,
        partition: &Partition<f64>,
        fleet: &[String],
    ) -> Self {
        let clusters_used = partition.centroids.len();

        let mut groups: Vec<Vec<Row>> = vec![Vec::new(); clusters_used];
        for (stop, &label) in loaded.stops.iter().zip(partition.labels.iter()) {
            groups[label].push(records.rows()[stop.row].clone());
        }

        let mut assignments = IndexMap::with_capacity(fleet.len());
        for (index, vehicle) in fleet.iter().enumerate() {
            let rows = if index < clusters_used {
                std::mem::take(&mut groups[index])
            } else {
                Vec::new()
            };
            assignments.insert(vehicle.clone(), rows);
        }

        Self {
            assignments,
            clusters_used,
            valid_stops: loaded.stops.len(),
            dropped_rows: loaded.dropped_rows,
            inertia: Some(partition.inertia),
        }
    }

    /// The all-empty assignment produced when no stop is valid.
    pub(crate) fn empty(fleet: &[String], dropped_rows: usize) -> Self {
        let mut assignments = IndexMap::with_capacity(fleet.len());
        for vehicle in fleet {
            assignments.insert(vehicle.clone(), Vec::new());
        }
        Self {
            assignments,
            clusters_used: 0,
            valid_stops: 0,
            dropped_rows,
            inertia: None,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The rows assigned to one vehicle, if it exists in the fleet.
    pub fn stops_for(&self, vehicle: &str) -> Option<&[Row]> {
        self.assignments.get(vehicle).map(Vec::as_slice)
    }

    /// Total rows assigned across all vehicles.
    pub fn total_assigned(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Whether no stop was assigned to any vehicle.
    pub fn is_empty(&self) -> bool {
        self.total_assigned() == 0
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ClusterAssignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Assignment Summary:")?;
        writeln!(f, "  Valid stops:  {}", self.valid_stops)?;
        writeln!(f, "  Dropped rows: {}", self.dropped_rows)?;
        writeln!(f, "  Groups:       {}", self.clusters_used)?;
        if let Some(inertia) = self.inertia {
            writeln!(f, "  Inertia:      {inertia:.6}")?;
        }
        writeln!(f)?;

        writeln!(f, "{:<16} {:>6}", "Vehicle", "Stops")?;
        writeln!(f, "{:-<23}", "")?;
        for (vehicle, rows) in &self.assignments {
            writeln!(f, "{:<16} {:>6}", vehicle, rows.len())?;
        }

        Ok(())
    }
}
