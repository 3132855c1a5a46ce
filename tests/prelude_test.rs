//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the assignment API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use fleetcluster::prelude::*;
use serde_json::{json, Map};

fn stop_row(name: &str, lat: f64, lon: f64) -> Row {
    let mut row = Map::new();
    row.insert("name".into(), json!(name));
    row.insert("lat".into(), json!(lat));
    row.insert("lon".into(), json!(lon));
    row
}

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let records = RecordSet::from_rows(vec![
        stop_row("A", 12.90, 77.58),
        stop_row("B", 12.91, 77.59),
        stop_row("C", 13.10, 77.75),
    ]);

    let result = FleetCluster::new()
        .fleet(["V1", "V2"])
        .build()
        .unwrap()
        .assign(&records);

    assert!(result.is_ok(), "Basic assignment should work with prelude imports");
}

/// Test that the error type is exported.
///
/// Verifies that `FleetClusterError` can be named without qualification.
#[test]
fn test_prelude_error_type() {
    let err: FleetClusterError = FleetCluster::new().build().unwrap_err();
    assert_eq!(err, FleetClusterError::EmptyFleet);
}

/// Test that the dispatcher type is exported.
///
/// Verifies that `ClusterDispatcher` can be stored by name.
#[test]
fn test_prelude_dispatcher_type() {
    let dispatcher: ClusterDispatcher = FleetCluster::new().fleet(["V1"]).build().unwrap();
    assert_eq!(dispatcher.config().fleet, ["V1"]);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test the full builder surface through the prelude.
///
/// Verifies that every setter chains and the result type is accessible.
#[test]
fn test_prelude_full_builder() {
    let records = RecordSet::from_rows(vec![
        stop_row("A", 12.90, 77.58),
        stop_row("B", 12.91, 77.59),
    ]);

    let assignment: ClusterAssignment = FleetCluster::new()
        .fleet(["V1", "V2"])
        .clusters(2)
        .seed(7)
        .restarts(4)
        .max_iterations(50)
        .build()
        .unwrap()
        .assign(&records)
        .unwrap();

    assert_eq!(assignment.total_assigned(), 2);
}
