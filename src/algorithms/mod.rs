//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core partitioning algorithm: seeded,
//! multi-restart k-means over 2-D points.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Deterministic k-means partitioning.
pub mod kmeans;
