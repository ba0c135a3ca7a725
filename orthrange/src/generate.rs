//! Random points and query rectangles, for tests and benchmarks.
//!
//! Every function takes the random number generator as a parameter, so seeding it makes the
//! generated data reproducible.

use std::ops::Range;

use rand::Rng;

use crate::{point::Point, rectangle::Rectangle};

/// Returns `n` points uniformly distributed in the square `scope × scope`.
///
/// # Panics
///
/// Panics if `scope` is empty and `n` is not zero.
pub fn points<R: Rng>(rng: &mut R, scope: Range<f64>, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(scope.clone()),
                rng.gen_range(scope.clone()),
            )
        })
        .collect()
}

/// Returns `cluster_count` clusters of `per_cluster` points each.
///
/// Cluster centers are uniformly distributed in the square `scope × scope` and the points of a
/// cluster uniformly distributed in the disk of the given radius around its center.
///
/// # Panics
///
/// Panics if `scope` is empty and `cluster_count` is not zero.
pub fn clusters<R: Rng>(
    rng: &mut R,
    scope: Range<f64>,
    per_cluster: usize,
    cluster_count: usize,
    radius: f64,
) -> Vec<Point> {
    let mut result = Vec::with_capacity(per_cluster * cluster_count);

    for _ in 0..cluster_count {
        let cx = rng.gen_range(scope.clone());
        let cy = rng.gen_range(scope.clone());

        result.extend((0..per_cluster).map(|_| {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = radius * rng.gen::<f64>().sqrt();
            Point::new(cx + distance * angle.cos(), cy + distance * angle.sin())
        }));
    }

    result
}

/// Returns the bounding box of two points uniformly distributed in the square `scope × scope`.
///
/// Pairs of points sharing a coordinate are drawn again.
///
/// # Panics
///
/// Panics if `scope` holds fewer than two representable values, as no such pair could be drawn.
pub fn rectangle<R: Rng>(rng: &mut R, scope: Range<f64>) -> Rectangle {
    assert!(
        scope.start.next_up() < scope.end,
        "scope {scope:?} is too narrow to draw a rectangle from"
    );

    loop {
        if let Some(rectangle) = Rectangle::from_points(points(rng, scope.clone(), 2)) {
            return rectangle;
        }
    }
}
