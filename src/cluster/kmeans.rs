//! Lloyd's k-means over 2D points with seeded k-means++ restarts.

use crate::cluster::init::plus_plus_init;
use crate::point::Point;
use crate::trace::{enter_stage, progress, report};
use crate::util::{FinditError, FinditResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Parameters controlling a k-means fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KmeansConfig {
    /// Maximum Lloyd iterations per restart.
    pub max_iter: usize,
    /// Convergence tolerance, relative to the mean per-axis variance of the data.
    pub tol: f64,
    /// Number of k-means++ restarts; the lowest-inertia run is kept.
    pub n_init: usize,
    /// Seed for the restart RNG. Equal seeds give equal fits.
    pub seed: u64,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            max_iter: 300,
            tol: 1e-4,
            n_init: 10,
            seed: 0,
        }
    }
}

/// Result of a k-means fit.
#[derive(Clone, Debug, PartialEq)]
pub struct KmeansFit {
    /// Cluster label for each input point, in input order.
    pub labels: Vec<usize>,
    /// Centroid for each label.
    pub centroids: Vec<Point>,
    /// Sum of squared distances from points to their centroids.
    pub inertia: f64,
    /// Lloyd iterations run by the winning restart.
    pub iterations: usize,
}

impl KmeansFit {
    /// Returns the number of points assigned to each label.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.len()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

/// k-means clusterer for a fixed cluster count.
#[derive(Clone, Debug)]
pub struct Kmeans {
    k: usize,
    config: KmeansConfig,
}

impl Kmeans {
    /// Creates a clusterer for `k` clusters with default parameters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            config: KmeansConfig::default(),
        }
    }

    /// Replaces the fit parameters.
    pub fn with_config(mut self, config: KmeansConfig) -> Self {
        self.config = config;
        self
    }

    /// Partitions `points` into `k` clusters.
    ///
    /// Fails with `InvalidArgument` when `points` is empty, `k` is zero or `k`
    /// exceeds the number of points.
    pub fn fit(&self, points: &[Point]) -> FinditResult<KmeansFit> {
        if points.is_empty() {
            return Err(FinditError::InvalidArgument("no points to cluster"));
        }
        if self.k == 0 {
            return Err(FinditError::InvalidArgument("cluster count must be positive"));
        }
        if self.k > points.len() {
            return Err(FinditError::InvalidArgument(
                "cluster count exceeds number of points",
            ));
        }

        enter_stage!(_stage, "kmeans_fit", k = self.k, points = points.len());

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let tol = self.config.tol * mean_axis_variance(points);

        let mut best: Option<KmeansFit> = None;
        for restart in 0..self.config.n_init.max(1) {
            let init = plus_plus_init(points, self.k, &mut rng);
            let fit = lloyd(points, init, self.config.max_iter, tol);
            progress!(
                "kmeans_restart",
                restart = restart,
                iterations = fit.iterations,
                inertia = fit.inertia
            );
            if best.as_ref().map_or(true, |b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        let best = best.ok_or(FinditError::InvalidArgument("no k-means restarts ran"))?;
        report!(
            "kmeans_done",
            iterations = best.iterations,
            inertia = best.inertia
        );
        Ok(best)
    }
}

fn lloyd(points: &[Point], mut centroids: Vec<Point>, max_iter: usize, tol: f64) -> KmeansFit {
    let mut labels = vec![0usize; points.len()];
    let mut iterations = 0;

    for _ in 0..max_iter.max(1) {
        assign(points, &centroids, &mut labels);
        let updated = update_centroids(points, &labels, &centroids);
        let shift: f64 = centroids
            .iter()
            .zip(&updated)
            .map(|(old, new)| old.distance_sq(new))
            .sum();
        centroids = updated;
        iterations += 1;
        progress!("kmeans_iteration", iteration = iterations, shift = shift);
        if shift <= tol {
            break;
        }
    }

    // Relabel against the final centroids so labels and centroids agree.
    let inertia = assign(points, &centroids, &mut labels);
    KmeansFit {
        labels,
        centroids,
        inertia,
        iterations,
    }
}

/// Assigns each point to its nearest centroid (lowest index on ties) and
/// returns the resulting inertia.
fn assign(points: &[Point], centroids: &[Point], labels: &mut [usize]) -> f64 {
    let mut inertia = 0.0;
    for (label, point) in labels.iter_mut().zip(points) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;
        for (idx, centroid) in centroids.iter().enumerate() {
            let d = point.distance_sq(centroid);
            if d < best_dist {
                best_dist = d;
                best_idx = idx;
            }
        }
        *label = best_idx;
        inertia += best_dist;
    }
    inertia
}

/// Moves each centroid to the mean of its members. Empty clusters keep their
/// previous centroid.
fn update_centroids(points: &[Point], labels: &[usize], previous: &[Point]) -> Vec<Point> {
    let k = previous.len();
    let mut sums = vec![(0.0f64, 0.0f64); k];
    let mut counts = vec![0usize; k];
    for (point, &label) in points.iter().zip(labels) {
        sums[label].0 += point.x();
        sums[label].1 += point.y();
        counts[label] += 1;
    }

    previous
        .iter()
        .zip(sums.iter().zip(&counts))
        .map(|(prev, (&(sx, sy), &count))| {
            if count == 0 {
                *prev
            } else {
                let n = count as f64;
                Point::new(sx / n, sy / n)
            }
        })
        .collect()
}

fn mean_axis_variance(points: &[Point]) -> f64 {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    let (mx, my) = (sx / n, sy / n);
    let (vx, vy) = points.iter().fold((0.0, 0.0), |(vx, vy), p| {
        let dx = p.x() - mx;
        let dy = p.y() - my;
        (vx + dx * dx, vy + dy * dy)
    });
    (vx / n + vy / n) / 2.0
}
