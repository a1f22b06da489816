//! Partition-based clustering of 2D points.
//!
//! `Kmeans` runs Lloyd's algorithm from k-means++ seeds. All randomness comes
//! from a `StdRng` seeded by `KmeansConfig::seed`, so a fit is reproducible.

pub(crate) mod init;
pub mod kmeans;

pub use kmeans::{Kmeans, KmeansConfig, KmeansFit};
