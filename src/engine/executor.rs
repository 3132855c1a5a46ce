//! Execution engine for stop-to-vehicle assignment.
//!
//! ## Purpose
//!
//! This module sequences the assignment pipeline for one batch: schema
//! validation → stop collection → coordinate normalization →
//! cluster-count selection → partitioning → vehicle binding. It owns the
//! batch-level policies: the `min(fleet, distinct positions)` default for
//! the cluster count and the zero-valid-stops short-circuit.
//!
//! ## Design notes
//!
//! * **Explicit configuration**: The fleet and every tunable arrive in a
//!   [`ClusterConfig`] value; the engine keeps no module-level state.
//! * **Stateless**: Each invocation is an atomic request → response. The
//!   engine retains no reference to inputs after returning, so
//!   concurrent invocations are independent.
//! * **Sequential**: Loading, normalization, partitioning, and binding
//!   run in order with no suspension points and no I/O.
//!
//! ## Invariants
//!
//! * Structural errors surface before any clustering work happens.
//! * The output maps every fleet vehicle, in fleet order.
//!
//! ## Non-goals
//!
//! * This module does not enforce deadlines; the iteration cap bounds
//!   running time and callers needing more must bound input size.
//! * This module does not clamp an explicit cluster-count override.

// External dependencies
use log::debug;
use std::collections::HashSet;

// Internal dependencies
use crate::algorithms::kmeans::KMeans;
use crate::engine::loader;
use crate::engine::output::ClusterAssignment;
use crate::engine::validator::Validator;
use crate::math::scaling::zscore_normalize;
use crate::primitives::errors::FleetClusterError;
use crate::primitives::record::RecordSet;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one assignment run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    /// Ordered vehicle identifiers; group `i` binds to `fleet[i]`.
    pub fleet: Vec<String>,

    /// Explicit cluster-count override. `None` selects
    /// `min(fleet size, distinct positions)`.
    pub clusters: Option<usize>,

    /// Seed for centroid initialization.
    pub seed: u64,

    /// Independent seeded restarts; lowest objective wins.
    pub restarts: usize,

    /// Iteration cap per restart.
    pub max_iterations: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            fleet: Vec::new(),
            clusters: None,
            seed: KMeans::DEFAULT_SEED,
            restarts: KMeans::DEFAULT_RESTARTS,
            max_iterations: KMeans::DEFAULT_MAX_ITERATIONS,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for the assignment pipeline.
pub struct ClusterExecutor;

impl ClusterExecutor {
    /// Run the full pipeline for one batch.
    pub fn run(
        records: &RecordSet,
        config: &ClusterConfig,
    ) -> Result<ClusterAssignment, FleetClusterError> {
        Validator::validate_fleet(&config.fleet)?;
        Validator::validate_schema(records)?;

        let loaded = loader::collect_stops(records);
        if loaded.stops.is_empty() {
            debug!("no valid stops; every vehicle receives an empty route");
            return Ok(ClusterAssignment::empty(&config.fleet, loaded.dropped_rows));
        }

        let raw: Vec<[f64; 2]> = loaded.stops.iter().map(|stop| stop.position()).collect();
        let normalized = zscore_normalize(&raw);

        let k = match config.clusters {
            Some(k) => k,
            None => config.fleet.len().min(distinct_positions(&normalized)),
        };
        debug!(
            "clustering {} stops into {} groups for {} vehicles",
            loaded.stops.len(),
            k,
            config.fleet.len()
        );

        let kmeans = KMeans {
            clusters: k,
            seed: config.seed,
            restarts: config.restarts,
            max_iterations: config.max_iterations,
        };
        let partition = kmeans.fit(&normalized)?;

        Ok(ClusterAssignment::bind(
            records,
            &loaded,
            &partition,
            &config.fleet,
        ))
    }
}

/// Count distinct coordinate pairs, bit-exact; duplicates count once.
fn distinct_positions(points: &[[f64; 2]]) -> usize {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        seen.insert((point[0].to_bits(), point[1].to_bits()));
    }
    seen.len()
}
