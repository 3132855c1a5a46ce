//! Distance functions for 2-D points.

// External dependencies
use num_traits::Float;

/// Squared Euclidean distance between two 2-D points.
///
/// The square root is never needed for nearest-centroid comparisons, so it
/// is never taken.
#[inline]
pub fn squared_distance<T: Float>(a: [T; 2], b: [T; 2]) -> T {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}
