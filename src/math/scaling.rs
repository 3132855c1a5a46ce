//! Per-batch z-score normalization of coordinate pairs.
//!
//! ## Purpose
//!
//! This module rescales raw `(lat, lon)` pairs so that both dimensions
//! contribute comparably to Euclidean distances. A degree of longitude
//! spans a different ground distance than a degree of latitude depending
//! on the latitude band; standardizing each dimension against the batch
//! removes that imbalance without requiring a geodesic projection.
//!
//! ## Design notes
//!
//! * **Per-batch**: Statistics are computed from the batch being
//!   clustered, never from prior invocations.
//! * **Population form**: The standard deviation uses the `n` divisor.
//!   The divisor rescales both dimensions by the same factor, so the
//!   choice cannot affect cluster membership.
//! * **Generics**: Normalization is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A zero-variance dimension maps to `0` for every point; division by
//!   zero cannot occur.
//! * The output has the same length and ordering as the input.
//!
//! ## Non-goals
//!
//! * This module does not project coordinates geodesically; normalized
//!   distances approximate proximity at city scale only.
//! * This module does not validate finiteness (inputs are pre-validated).

// External dependencies
use num_traits::Float;

// ============================================================================
// Z-Score Normalization
// ============================================================================

/// Map each point to `((x - mean_x) / std_x, (y - mean_y) / std_y)`.
///
/// Each dimension is standardized independently against the batch. A
/// dimension whose standard deviation is zero (all points share that
/// coordinate) maps to `0` for every point.
pub fn zscore_normalize<T: Float>(points: &[[T; 2]]) -> Vec<[T; 2]> {
    if points.is_empty() {
        return Vec::new();
    }

    let (mean_x, std_x) = dimension_stats(points, 0);
    let (mean_y, std_y) = dimension_stats(points, 1);

    points
        .iter()
        .map(|point| {
            [
                standardize(point[0], mean_x, std_x),
                standardize(point[1], mean_y, std_y),
            ]
        })
        .collect()
}

/// Mean and population standard deviation of one dimension.
pub fn dimension_stats<T: Float>(points: &[[T; 2]], dim: usize) -> (T, T) {
    let n = T::from(points.len()).unwrap_or_else(T::one);

    let mut sum = T::zero();
    for point in points {
        sum = sum + point[dim];
    }
    let mean = sum / n;

    let mut sum_sq = T::zero();
    for point in points {
        let deviation = point[dim] - mean;
        sum_sq = sum_sq + deviation * deviation;
    }
    let std = (sum_sq / n).sqrt();

    (mean, std)
}

#[inline]
fn standardize<T: Float>(value: T, mean: T, std: T) -> T {
    if std > T::zero() {
        (value - mean) / std
    } else {
        T::zero()
    }
}
