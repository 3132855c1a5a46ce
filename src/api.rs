//! High-level API for stop-to-vehicle assignment.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the fleet and the clustering tunables, and the
//! dispatcher it produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every
//!   parameter except the fleet, which has no sensible default.
//! * **Validated**: All parameters are validated when `build()` is
//!   called; the dispatcher cannot exist in an invalid configuration.
//! * **Stateless dispatch**: The dispatcher borrows its input per call
//!   and returns the assignment by value.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `FleetClusterBuilder::new()` → setters →
//!   `.build()` → [`ClusterDispatcher::assign`].
//! * **Duplicate detection**: Setting the same parameter twice is a
//!   configuration error surfaced at `build()`.

// Internal dependencies
use crate::algorithms::kmeans::KMeans;
use crate::engine::executor::ClusterExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::ClusterConfig;
pub use crate::engine::output::ClusterAssignment;
pub use crate::primitives::errors::FleetClusterError;
pub use crate::primitives::record::{RecordSet, Row, Stop};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring stop-to-vehicle assignment.
#[derive(Debug, Clone, Default)]
pub struct FleetClusterBuilder {
    /// Ordered vehicle identifiers.
    pub fleet: Option<Vec<String>>,

    /// Explicit cluster-count override.
    pub clusters: Option<usize>,

    /// Seed for centroid initialization.
    pub seed: Option<u64>,

    /// Independent seeded restarts.
    pub restarts: Option<usize>,

    /// Iteration cap per restart.
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FleetClusterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordered vehicle identifiers receiving assignments.
    pub fn fleet<I, S>(mut self, vehicles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.fleet.is_some() {
            self.duplicate_param = Some("fleet");
        }
        self.fleet = Some(vehicles.into_iter().map(Into::into).collect());
        self
    }

    /// Override the cluster count.
    ///
    /// The override is used as-is — never clamped against the fleet size
    /// or the number of distinct positions. Partitioning still rejects a
    /// count outside `[1, N]` for `N` valid stops.
    pub fn clusters(mut self, clusters: usize) -> Self {
        if self.clusters.is_some() {
            self.duplicate_param = Some("clusters");
        }
        self.clusters = Some(clusters);
        self
    }

    /// Set the seed for centroid initialization (default 42).
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the number of independent seeded restarts (default 10).
    pub fn restarts(mut self, restarts: usize) -> Self {
        if self.restarts.is_some() {
            self.duplicate_param = Some("restarts");
        }
        self.restarts = Some(restarts);
        self
    }

    /// Set the iteration cap per restart (default 300).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and produce a dispatcher.
    pub fn build(self) -> Result<ClusterDispatcher, FleetClusterError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fleet = self.fleet.unwrap_or_default();
        Validator::validate_fleet(&fleet)?;

        let restarts = self.restarts.unwrap_or(KMeans::DEFAULT_RESTARTS);
        Validator::validate_restarts(restarts)?;

        let max_iterations = self.max_iterations.unwrap_or(KMeans::DEFAULT_MAX_ITERATIONS);
        Validator::validate_iterations(max_iterations)?;

        Ok(ClusterDispatcher {
            config: ClusterConfig {
                fleet,
                clusters: self.clusters,
                seed: self.seed.unwrap_or(KMeans::DEFAULT_SEED),
                restarts,
                max_iterations,
            },
        })
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// A validated assignment engine bound to one fleet configuration.
#[derive(Debug, Clone)]
pub struct ClusterDispatcher {
    config: ClusterConfig,
}

impl ClusterDispatcher {
    /// Assign every valid stop in the record set to a fleet vehicle.
    ///
    /// Returns the complete vehicle → stops mapping; retains no reference
    /// to the input after returning.
    pub fn assign(&self, records: &RecordSet) -> Result<ClusterAssignment, FleetClusterError> {
        ClusterExecutor::run(records, &self.config)
    }

    /// The validated configuration driving this dispatcher.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }
}
