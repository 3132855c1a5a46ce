//! Error types for stop-to-vehicle assignment.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! an engine or computing an assignment: schema violations, cluster-count
//! constraints, and configuration misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the missing
//!   column names, the offending cluster count and point count).
//! * **Two-tier**: Only structural failures surface here. Row-level
//!   coordinate parse failures are not errors; such rows are silently
//!   excluded before clustering.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for stop-to-vehicle assignment operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FleetClusterError {
    /// The record set header lacks one or more required columns.
    ///
    /// Fatal to the whole batch: no partial assignment is produced.
    MissingColumns {
        /// Required column names absent from the record set.
        missing: Vec<String>,
    },

    /// Requested cluster count is outside `[1, N]` for `N` valid stops.
    InvalidClusterCount {
        /// The cluster count requested.
        k: usize,
        /// Number of valid stops available for clustering.
        n: usize,
    },

    /// The fleet contains no vehicle identifiers.
    EmptyFleet,

    /// Restart count must be at least 1.
    InvalidRestarts(usize),

    /// Iteration cap must be in `[1, 10000]`.
    InvalidIterations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FleetClusterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingColumns { missing } => {
                write!(
                    f,
                    "Record set is missing required columns: {}",
                    missing.join(", ")
                )
            }
            Self::InvalidClusterCount { k, n } => {
                write!(
                    f,
                    "Invalid cluster count: {k} (must be between 1 and the number of valid stops, {n})"
                )
            }
            Self::EmptyFleet => {
                write!(f, "Fleet is empty: at least one vehicle identifier is required")
            }
            Self::InvalidRestarts(restarts) => {
                write!(f, "Invalid restarts: {restarts} (must be at least 1)")
            }
            Self::InvalidIterations(iterations) => {
                write!(
                    f,
                    "Invalid max_iterations: {iterations} (must be in [1, 10000])"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for FleetClusterError {}
