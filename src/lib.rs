//! # fleetcluster — stop-to-vehicle assignment by spatial clustering
//!
//! `fleetcluster` partitions a batch of delivery stops into spatially
//! compact groups, one group per vehicle, and binds each group to a vehicle
//! identifier from a caller-supplied fleet. The grouping is computed with
//! seeded, multi-restart k-means over per-batch z-score-normalized
//! coordinates, so repeated runs on identical input produce identical
//! assignments.
//!
//! ## What it does
//!
//! Given a tabular record set whose rows carry `name`, `lat`, and `lon`
//! fields (plus any number of passthrough fields), the engine:
//!
//! 1. Validates the schema and collects the rows with parseable, finite
//!    coordinates (rows without them are dropped, not fatal).
//! 2. Normalizes coordinates per batch (z-score per dimension) so latitude
//!    and longitude contribute comparably to distances.
//! 3. Selects the cluster count `k = min(fleet size, distinct positions)`
//!    unless the caller overrides it.
//! 4. Partitions the stops with deterministic k-means.
//! 5. Binds cluster `i` to the `i`-th vehicle of the fleet; vehicles beyond
//!    the cluster count receive empty routes.
//!
//! ## Quick Start
//!
//! ```rust
//! use fleetcluster::prelude::*;
//! use serde_json::{json, Map};
//!
//! fn row(name: &str, lat: f64, lon: f64) -> Row {
//!     let mut row = Map::new();
//!     row.insert("name".into(), json!(name));
//!     row.insert("lat".into(), json!(lat));
//!     row.insert("lon".into(), json!(lon));
//!     row
//! }
//!
//! let records = RecordSet::from_rows(vec![
//!     row("Jayanagar depot", 12.9250, 77.5938),
//!     row("Koramangala hub", 12.9352, 77.6245),
//!     row("Whitefield yard", 12.9698, 77.7500),
//! ]);
//!
//! let engine = FleetCluster::new()
//!     .fleet(["KA25EV001", "KA25EV002", "KA25EV003"])
//!     .build()?;
//!
//! let assignment = engine.assign(&records)?;
//!
//! for (vehicle, stops) in &assignment.assignments {
//!     println!("{vehicle}: {} stops", stops.len());
//! }
//! # Result::<(), FleetClusterError>::Ok(())
//! ```
//!
//! ## Determinism
//!
//! Cluster membership is a pure function of the input point set, the
//! cluster count, and the configured seed (default 42). Centroid seeding
//! draws from an internal linear congruential generator; no wall-clock
//! time or external entropy is consulted. Callers that persist and later
//! re-display an assignment can rely on byte-identical reproduction from
//! identical input.
//!
//! ## Error handling
//!
//! Fallible operations return `Result<_, FleetClusterError>`. Structural
//! problems are fatal to the whole batch (a missing required column, a
//! cluster count outside `[1, N]`); per-row coordinate parse failures are
//! tolerated and simply excluded from clustering.
//!
//! ```rust
//! use fleetcluster::prelude::*;
//!
//! let records = RecordSet::new(vec!["name".into(), "lat".into()], vec![]);
//! let engine = FleetCluster::new().fleet(["VAN-1"]).build()?;
//!
//! match engine.assign(&records) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(e.to_string().contains("lon")),
//! }
//! # Result::<(), FleetClusterError>::Ok(())
//! ```
//!
//! ## Limitations
//!
//! Distances are Euclidean in normalized coordinate space, not geodesic.
//! At neighborhood or city scale this is a good proxy for proximity; over
//! large latitude spans the approximation degrades and a projected
//! coordinate system should be applied upstream. The engine also does not
//! order stops within a route, balance group sizes, or account for
//! road-network travel time.
//!
//! ## References
//!
//! - Lloyd, S. (1982). "Least squares quantization in PCM"
//! - Arthur, D. & Vassilvitskii, S. (2007). "k-means++: The Advantages of
//!   Careful Seeding"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the core partitioning algorithm.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for stop-to-vehicle assignment.
mod api;

// Standard fleetcluster prelude.
pub mod prelude {
    pub use crate::api::{
        ClusterAssignment, ClusterDispatcher, FleetClusterBuilder as FleetCluster,
        FleetClusterError, RecordSet, Row, Stop,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
