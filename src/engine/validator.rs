//! Input validation for assignment configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the engine's
//! configuration parameters and input record sets. It checks the schema
//! contract, fleet non-emptiness, cluster-count bounds, and tunable
//! ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Two-tier**: Only structural problems are errors. Row-level
//!   coordinate parse failures are handled by the loader, not here.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::FleetClusterError;
use crate::primitives::record::RecordSet;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for assignment configuration and input data.
///
/// Provides static methods returning `Result<(), FleetClusterError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Columns every record set must declare, case-sensitive.
    pub const REQUIRED_COLUMNS: [&'static str; 3] = ["name", "lat", "lon"];

    /// Maximum permitted iteration cap.
    const MAX_ITERATIONS: usize = 10_000;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that the record set header carries all required columns.
    ///
    /// Fatal for the whole batch when any required column is absent; no
    /// partial processing happens downstream.
    pub fn validate_schema(records: &RecordSet) -> Result<(), FleetClusterError> {
        let missing: Vec<String> = Self::REQUIRED_COLUMNS
            .iter()
            .filter(|required| !records.columns().iter().any(|column| column == *required))
            .map(|required| (*required).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(FleetClusterError::MissingColumns { missing });
        }
        Ok(())
    }

    /// Validate that the fleet holds at least one vehicle identifier.
    pub fn validate_fleet(fleet: &[String]) -> Result<(), FleetClusterError> {
        if fleet.is_empty() {
            return Err(FleetClusterError::EmptyFleet);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a cluster count against the number of valid stops.
    ///
    /// Rejects `k < 1` and `k > n`; never clamps.
    pub fn validate_cluster_count(k: usize, n: usize) -> Result<(), FleetClusterError> {
        if k < 1 || k > n {
            return Err(FleetClusterError::InvalidClusterCount { k, n });
        }
        Ok(())
    }

    /// Validate the restart count.
    pub fn validate_restarts(restarts: usize) -> Result<(), FleetClusterError> {
        if restarts < 1 {
            return Err(FleetClusterError::InvalidRestarts(restarts));
        }
        Ok(())
    }

    /// Validate the per-restart iteration cap.
    pub fn validate_iterations(iterations: usize) -> Result<(), FleetClusterError> {
        if iterations < 1 || iterations > Self::MAX_ITERATIONS {
            return Err(FleetClusterError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FleetClusterError> {
        if let Some(parameter) = duplicate_param {
            return Err(FleetClusterError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
