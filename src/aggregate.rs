//! Collapses candidate match locations into one representative point.
//!
//! Candidates are clustered with k-means and the centroid of the most
//! populated cluster is returned. Scattered false positives end up in small
//! clusters of their own, so the result tracks the dense group of true hits
//! rather than the plain mean of everything.

use crate::cluster::{Kmeans, KmeansConfig};
use crate::point::Point;
use crate::trace::{enter_stage, report};
use crate::util::{FinditError, FinditResult};

/// Default upper bound on the number of clusters.
pub const DEFAULT_CLUSTER_NUM: usize = 3;

/// Parameters for [`calculate_center_point_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregateConfig {
    /// Upper bound on the cluster count; the count used is `min(N, max_clusters)`.
    /// Values below 1 are treated as 1.
    pub max_clusters: usize,
    /// Parameters forwarded to the k-means fit.
    pub kmeans: KmeansConfig,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            max_clusters: DEFAULT_CLUSTER_NUM,
            kmeans: KmeansConfig::default(),
        }
    }
}

/// Returns the centroid of the dominant cluster among `points`.
///
/// Uses [`AggregateConfig::default`]. See [`calculate_center_point_with`].
pub fn calculate_center_point(points: &[Point]) -> FinditResult<Point> {
    calculate_center_point_with(points, &AggregateConfig::default())
}

/// Returns the centroid of the dominant cluster among `points`.
///
/// The cluster count is `min(points.len(), config.max_clusters)`. When several
/// clusters share the largest membership, the one with the lowest label wins.
/// A single input point is returned as is.
pub fn calculate_center_point_with(
    points: &[Point],
    config: &AggregateConfig,
) -> FinditResult<Point> {
    if points.is_empty() {
        return Err(FinditError::InvalidArgument("no points to aggregate"));
    }

    let k = points.len().min(config.max_clusters.max(1));
    enter_stage!(_stage, "calculate_center_point", points = points.len(), k = k);

    let fit = Kmeans::new(k).with_config(config.kmeans).fit(points)?;
    let sizes = fit.cluster_sizes();
    let (label, members) = mode_label(&sizes);

    report!("mode_cluster", label = label, members = members, k = k);
    Ok(fit.centroids[label])
}

/// Returns `(label, count)` of the largest cluster, lowest label on ties.
fn mode_label(sizes: &[usize]) -> (usize, usize) {
    let mut best = (0usize, 0usize);
    for (label, &count) in sizes.iter().enumerate() {
        if count > best.1 {
            best = (label, count);
        }
    }
    best
}
