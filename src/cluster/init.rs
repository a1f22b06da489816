//! k-means++ seeding.

use crate::point::Point;
use rand::rngs::StdRng;
use rand::Rng;

/// Picks `k` initial centroids with k-means++ sampling.
///
/// The first centroid is drawn uniformly; each following one is drawn with
/// probability proportional to its squared distance from the nearest centroid
/// chosen so far. When every point already coincides with a centroid the draw
/// falls back to uniform sampling. Callers guarantee `1 <= k <= points.len()`.
pub(crate) fn plus_plus_init(points: &[Point], k: usize, rng: &mut StdRng) -> Vec<Point> {
    let mut centroids = Vec::with_capacity(k);
    let first = points[rng.random_range(0..points.len())];
    centroids.push(first);

    let mut nearest: Vec<f64> = points.iter().map(|p| p.distance_sq(&first)).collect();

    while centroids.len() < k {
        let total: f64 = nearest.iter().sum();
        let idx = if total > 0.0 {
            sample_weighted(&nearest, total, rng)
        } else {
            rng.random_range(0..points.len())
        };

        let chosen = points[idx];
        centroids.push(chosen);
        for (dist, point) in nearest.iter_mut().zip(points) {
            let d = point.distance_sq(&chosen);
            if d < *dist {
                *dist = d;
            }
        }
    }

    centroids
}

fn sample_weighted(weights: &[f64], total: f64, rng: &mut StdRng) -> usize {
    let mut target = rng.random::<f64>() * total;
    for (idx, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        if target < w {
            return idx;
        }
        target -= w;
    }
    // Rounding can leave a sliver of `target`; settle on the last candidate.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::plus_plus_init;
    use crate::point::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_reuses_a_point_while_distinct_points_remain() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let centroids = plus_plus_init(&points, 3, &mut rng);
            assert_eq!(centroids.len(), 3);
            for (i, a) in centroids.iter().enumerate() {
                for b in centroids.iter().skip(i + 1) {
                    assert_ne!(a, b, "seed {seed} picked a duplicate centroid");
                }
            }
        }
    }

    #[test]
    fn handles_identical_points() {
        let points = [Point::new(2.0, 2.0); 4];
        let mut rng = StdRng::seed_from_u64(7);
        let centroids = plus_plus_init(&points, 3, &mut rng);
        assert_eq!(centroids, vec![Point::new(2.0, 2.0); 3]);
    }
}
