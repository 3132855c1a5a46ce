//! Deterministic k-means partitioning of 2-D points.
//!
//! ## Purpose
//!
//! This module partitions `N` points into `k` non-empty groups minimizing
//! total within-group squared distance to each group's centroid. It is the
//! algorithmic core of the engine: iterative relocation (Lloyd's
//! algorithm) with seeded initialization and multiple independent
//! restarts.
//!
//! ## Design notes
//!
//! * **Flat representation**: Points are a flat slice indexed by integer;
//!   labels are a parallel `Vec<usize>` of cluster ids. No per-point
//!   objects.
//! * **Seeded**: Initial centroids come from greedy D² sampling driven by
//!   an explicitly seeded LCG; restart `r` uses `seed + r`. Membership is
//!   a pure function of `(points, k, seed, restarts, max_iterations)`.
//! * **Ties**: Nearest-centroid ties break toward the lowest centroid
//!   index; equal-inertia restarts keep the earliest restart.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Every group is non-empty whenever `k ≤ N` (empty clusters are
//!   repaired deterministically after each assignment step).
//! * Labels are always in `[0, k)` and `labels.len() == N`.
//! * The iteration loop is bounded by `max_iterations`; termination is
//!   guaranteed in input-size-bounded time.
//!
//! ## Non-goals
//!
//! * This module does not normalize or validate coordinates.
//! * This module does not know about vehicles, rows, or payloads.

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::math::distance::squared_distance;
use crate::primitives::errors::FleetClusterError;
use crate::primitives::rng::SimpleRng;

// ============================================================================
// Partition Output
// ============================================================================

/// Result of one k-means fit: the lowest-inertia restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// Cluster id per point, parallel to the input slice.
    pub labels: Vec<usize>,

    /// Final centroid per cluster.
    pub centroids: Vec<[T; 2]>,

    /// Total within-cluster sum of squared distances.
    pub inertia: T,
}

// ============================================================================
// K-Means Configuration
// ============================================================================

/// Seeded multi-restart k-means over 2-D points.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    /// Target cluster count.
    pub clusters: usize,

    /// Base seed; restart `r` derives its stream from `seed + r`.
    pub seed: u64,

    /// Number of independent seeded restarts; the lowest-inertia run wins.
    pub restarts: usize,

    /// Iteration cap per restart.
    pub max_iterations: usize,
}

impl KMeans {
    /// Default seed for centroid initialization.
    pub const DEFAULT_SEED: u64 = 42;

    /// Default number of independent restarts.
    pub const DEFAULT_RESTARTS: usize = 10;

    /// Default iteration cap per restart.
    pub const DEFAULT_MAX_ITERATIONS: usize = 300;

    /// Create a configuration with default seed, restarts, and cap.
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters,
            seed: Self::DEFAULT_SEED,
            restarts: Self::DEFAULT_RESTARTS,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    // ========================================================================
    // Main API
    // ========================================================================

    /// Partition `points` into `self.clusters` non-empty groups.
    ///
    /// Fails with [`FleetClusterError::InvalidClusterCount`] when the
    /// cluster count is outside `[1, N]`. Never clamps.
    pub fn fit<T: Float>(&self, points: &[[T; 2]]) -> Result<Partition<T>, FleetClusterError> {
        let n = points.len();
        if self.clusters < 1 || self.clusters > n {
            return Err(FleetClusterError::InvalidClusterCount {
                k: self.clusters,
                n,
            });
        }

        let restarts = self.restarts.max(1);
        let mut best = self.run_single(points, 0);
        for restart in 1..restarts {
            let candidate = self.run_single(points, restart);
            trace!(
                "restart {} inertia {:.6} (best {:.6})",
                restart,
                candidate.inertia.to_f64().unwrap_or(f64::NAN),
                best.inertia.to_f64().unwrap_or(f64::NAN)
            );
            if candidate.inertia < best.inertia {
                best = candidate;
            }
        }

        debug!(
            "partitioned {} points into {} groups (inertia {:.6})",
            n,
            self.clusters,
            best.inertia.to_f64().unwrap_or(f64::NAN)
        );
        Ok(best)
    }

    // ========================================================================
    // Single Restart
    // ========================================================================

    /// One seeded Lloyd run: initialize, relocate until stable or capped.
    fn run_single<T: Float>(&self, points: &[[T; 2]], restart: usize) -> Partition<T> {
        let n = points.len();
        let k = self.clusters;
        let mut rng = SimpleRng::new(self.seed.wrapping_add(restart as u64));

        let mut centroids = seed_centroids(points, k, &mut rng);
        let mut labels = vec![0usize; n];
        let mut counts = vec![0usize; k];

        let mut iteration = 0;
        loop {
            let changed = assign_labels(points, &centroids, &mut labels);
            count_members(&labels, &mut counts);
            let repaired = repair_empty_clusters(points, &centroids, &mut labels, &mut counts);

            // Stable assignment against up-to-date centroids: done. The
            // first pass always updates, since the seeded centroids are
            // raw points, not member means.
            if iteration > 0 && !changed && !repaired {
                break;
            }

            update_centroids(points, &labels, &counts, &mut centroids);

            iteration += 1;
            if iteration >= self.max_iterations {
                break;
            }
        }

        let inertia = total_inertia(points, &centroids, &labels);
        Partition {
            labels,
            centroids,
            inertia,
        }
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Greedy D² ("k-means++" style) centroid seeding.
///
/// The first centroid is a uniformly sampled point; each subsequent
/// centroid is sampled with probability proportional to its squared
/// distance from the nearest centroid chosen so far. Entirely driven by
/// the supplied generator.
fn seed_centroids<T: Float>(points: &[[T; 2]], k: usize, rng: &mut SimpleRng) -> Vec<[T; 2]> {
    let n = points.len();
    let mut centroids: Vec<[T; 2]> = Vec::with_capacity(k);
    let mut nearest = vec![T::infinity(); n];

    centroids.push(points[rng.next_index(n)]);

    while centroids.len() < k {
        let latest = centroids[centroids.len() - 1];
        for (index, point) in points.iter().enumerate() {
            let d = squared_distance(*point, latest);
            if d < nearest[index] {
                nearest[index] = d;
            }
        }

        let total = nearest.iter().fold(T::zero(), |acc, &d| acc + d);
        let next = if total > T::zero() {
            sample_weighted(&nearest, total, rng)
        } else {
            // Every remaining point coincides with a chosen centroid;
            // duplicates are tolerated and repaired after assignment.
            rng.next_index(n)
        };
        centroids.push(points[next]);
    }

    centroids
}

/// Sample an index with probability proportional to its weight.
///
/// Zero-weight entries are never chosen while any positive weight exists.
fn sample_weighted<T: Float>(weights: &[T], total: T, rng: &mut SimpleRng) -> usize {
    let target = T::from(rng.next_f64()).unwrap_or_else(T::zero) * total;
    let mut cumulative = T::zero();
    let mut last_positive = 0;

    for (index, &weight) in weights.iter().enumerate() {
        if weight <= T::zero() {
            continue;
        }
        cumulative = cumulative + weight;
        last_positive = index;
        if cumulative >= target {
            return index;
        }
    }

    last_positive
}

// ============================================================================
// Relocation Steps
// ============================================================================

/// Assign each point to its nearest centroid.
///
/// Exact distance ties break toward the lowest centroid index. Returns
/// whether any label changed.
fn assign_labels<T: Float>(points: &[[T; 2]], centroids: &[[T; 2]], labels: &mut [usize]) -> bool {
    let mut changed = false;

    for (index, point) in points.iter().enumerate() {
        let mut best = 0usize;
        let mut best_dist = squared_distance(*point, centroids[0]);
        for (cluster, centroid) in centroids.iter().enumerate().skip(1) {
            let d = squared_distance(*point, *centroid);
            if d < best_dist {
                best_dist = d;
                best = cluster;
            }
        }
        if labels[index] != best {
            labels[index] = best;
            changed = true;
        }
    }

    changed
}

/// Recount cluster membership into `counts`.
fn count_members(labels: &[usize], counts: &mut [usize]) {
    counts.fill(0);
    for &label in labels {
        counts[label] += 1;
    }
}

/// Re-seed every empty cluster with a far point from a donor cluster.
///
/// The donor point is the one farthest from its own centroid among
/// clusters holding more than one member (lowest point index on ties).
/// With `k ≤ N` a donor always exists, so every cluster ends non-empty.
/// Returns whether any label was moved.
fn repair_empty_clusters<T: Float>(
    points: &[[T; 2]],
    centroids: &[[T; 2]],
    labels: &mut [usize],
    counts: &mut [usize],
) -> bool {
    let mut repaired = false;

    for cluster in 0..counts.len() {
        if counts[cluster] > 0 {
            continue;
        }

        let mut donor: Option<(usize, T)> = None;
        for (index, &label) in labels.iter().enumerate() {
            if counts[label] <= 1 {
                continue;
            }
            let d = squared_distance(points[index], centroids[label]);
            match donor {
                Some((_, best)) if d <= best => {}
                _ => donor = Some((index, d)),
            }
        }

        if let Some((index, _)) = donor {
            counts[labels[index]] -= 1;
            labels[index] = cluster;
            counts[cluster] = 1;
            repaired = true;
        }
    }

    repaired
}

/// Recompute each centroid as the mean of its assigned points.
///
/// A cluster with no members keeps its previous centroid (cannot occur
/// after repair, but the guard keeps the step total).
fn update_centroids<T: Float>(
    points: &[[T; 2]],
    labels: &[usize],
    counts: &[usize],
    centroids: &mut [[T; 2]],
) {
    let mut sums = vec![[T::zero(); 2]; centroids.len()];
    for (point, &label) in points.iter().zip(labels.iter()) {
        sums[label][0] = sums[label][0] + point[0];
        sums[label][1] = sums[label][1] + point[1];
    }

    for (cluster, centroid) in centroids.iter_mut().enumerate() {
        if counts[cluster] > 0 {
            let count = T::from(counts[cluster]).unwrap_or_else(T::one);
            *centroid = [sums[cluster][0] / count, sums[cluster][1] / count];
        }
    }
}

/// Total within-cluster sum of squared distances.
fn total_inertia<T: Float>(points: &[[T; 2]], centroids: &[[T; 2]], labels: &[usize]) -> T {
    points
        .iter()
        .zip(labels.iter())
        .fold(T::zero(), |acc, (point, &label)| {
            acc + squared_distance(*point, centroids[label])
        })
}
