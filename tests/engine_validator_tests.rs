#![cfg(feature = "dev")]
//! Tests for configuration and schema validation.
//!
//! These tests verify the fail-fast checks guarding the engine: the
//! schema contract, fleet non-emptiness, cluster-count bounds, and
//! tunable ranges.
//!
//! ## Test Organization
//!
//! 1. **Schema Validation** - required columns against the header
//! 2. **Fleet Validation** - non-emptiness
//! 3. **Parameter Validation** - cluster count, restarts, iterations

use fleetcluster::internals::api::FleetClusterError;
use fleetcluster::internals::engine::validator::Validator;
use fleetcluster::internals::primitives::record::RecordSet;

fn header(columns: &[&str]) -> RecordSet {
    RecordSet::new(columns.iter().map(|c| (*c).to_string()).collect(), vec![])
}

// ============================================================================
// Schema Validation Tests
// ============================================================================

/// Test acceptance of the exact required column set.
///
/// Verifies the minimal conforming header passes.
#[test]
fn test_schema_exact_columns() {
    assert!(Validator::validate_schema(&header(&["name", "lat", "lon"])).is_ok());
}

/// Test acceptance of extra columns.
///
/// Verifies the check is subset-based.
#[test]
fn test_schema_extra_columns() {
    let records = header(&["name", "lat", "lon", "priority", "parcels"]);
    assert!(Validator::validate_schema(&records).is_ok());
}

/// Test rejection of a missing column.
///
/// Verifies the missing name is reported.
#[test]
fn test_schema_missing_single_column() {
    let err = Validator::validate_schema(&header(&["name", "lat"])).unwrap_err();
    assert_eq!(
        err,
        FleetClusterError::MissingColumns {
            missing: vec!["lon".into()]
        }
    );
}

/// Test rejection of several missing columns.
///
/// Verifies all missing names are reported, in declaration order.
#[test]
fn test_schema_missing_multiple_columns() {
    let err = Validator::validate_schema(&header(&["address"])).unwrap_err();
    assert_eq!(
        err,
        FleetClusterError::MissingColumns {
            missing: vec!["name".into(), "lat".into(), "lon".into()]
        }
    );
}

/// Test case sensitivity of column names.
///
/// Verifies `Lat` does not satisfy the `lat` requirement.
#[test]
fn test_schema_case_sensitive() {
    let err = Validator::validate_schema(&header(&["name", "Lat", "lon"])).unwrap_err();
    assert_eq!(
        err,
        FleetClusterError::MissingColumns {
            missing: vec!["lat".into()]
        }
    );
}

// ============================================================================
// Fleet Validation Tests
// ============================================================================

/// Test fleet non-emptiness.
///
/// Verifies an empty identifier list is rejected and one vehicle
/// suffices.
#[test]
fn test_fleet_non_empty() {
    assert_eq!(
        Validator::validate_fleet(&[]).unwrap_err(),
        FleetClusterError::EmptyFleet
    );
    assert!(Validator::validate_fleet(&["V1".to_string()]).is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test cluster-count bounds.
///
/// Verifies `[1, n]` inclusive, rejection outside, no clamping.
#[test]
fn test_cluster_count_bounds() {
    assert!(Validator::validate_cluster_count(1, 5).is_ok());
    assert!(Validator::validate_cluster_count(5, 5).is_ok());
    assert_eq!(
        Validator::validate_cluster_count(0, 5).unwrap_err(),
        FleetClusterError::InvalidClusterCount { k: 0, n: 5 }
    );
    assert_eq!(
        Validator::validate_cluster_count(6, 5).unwrap_err(),
        FleetClusterError::InvalidClusterCount { k: 6, n: 5 }
    );
}

/// Test restart bounds.
///
/// Verifies at least one restart is required.
#[test]
fn test_restart_bounds() {
    assert!(Validator::validate_restarts(1).is_ok());
    assert!(Validator::validate_restarts(50).is_ok());
    assert_eq!(
        Validator::validate_restarts(0).unwrap_err(),
        FleetClusterError::InvalidRestarts(0)
    );
}

/// Test iteration-cap bounds.
///
/// Verifies the cap must be in `[1, 10000]`.
#[test]
fn test_iteration_bounds() {
    assert!(Validator::validate_iterations(1).is_ok());
    assert!(Validator::validate_iterations(10_000).is_ok());
    assert_eq!(
        Validator::validate_iterations(0).unwrap_err(),
        FleetClusterError::InvalidIterations(0)
    );
    assert_eq!(
        Validator::validate_iterations(10_001).unwrap_err(),
        FleetClusterError::InvalidIterations(10_001)
    );
}

/// Test duplicate-parameter detection.
///
/// Verifies the recorded parameter name is surfaced.
#[test]
fn test_duplicate_parameter() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("seed")).unwrap_err(),
        FleetClusterError::DuplicateParameter { parameter: "seed" }
    );
}
