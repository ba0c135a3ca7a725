use rand::{rngs::StdRng, SeedableRng};

use crate::{generate, prelude::*};

/// Returns the `n × n` grid of points with coordinates from 1 to `n`, sorted.
pub fn grid(n: u32) -> Vec<Point> {
    (1..=n)
        .flat_map(|x| (1..=n).map(move |y| Point::new(x as f64, y as f64)))
        .collect()
}

/// Sorts values by position, `x` first.
pub fn sorted<P: Position>(mut values: Vec<P>) -> Vec<P> {
    values.sort_by(|a, b| {
        let (a, b) = (a.position(), b.position());
        a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
    });
    values
}

/// Asserts that the index finds the same points as a brute-force scan, with multiplicity.
pub fn assert_matches_brute_force<T>(index: &T, points: &[Point], query: &Rectangle)
where
    T: RangeSearch<Point>,
{
    let expected = sorted(BruteForce(points).query(query));
    let found = sorted(index.query(query));

    assert_eq!(found, expected, "query {query:?}");
}

// The same suite is run for both trees, which must agree with a brute-force scan.
macro_rules! range_search_suite {
    ($name: ident, $build: expr) => {
        paste::paste! {
            #[test]
            fn [<$name _uniform_points>]() {
                let mut rng = StdRng::seed_from_u64(1);
                for n in [1, 2, 3, 10, 100, 1_000] {
                    let points = generate::points(&mut rng, 0.0..100.0, n);
                    let index = $build(points.clone());

                    for _ in 0..50 {
                        let query = generate::rectangle(&mut rng, -10.0..110.0);
                        assert_matches_brute_force(&index, &points, &query);
                    }
                }
            }

            #[test]
            fn [<$name _clustered_points>]() {
                let mut rng = StdRng::seed_from_u64(2);
                let points = generate::clusters(&mut rng, 0.0..100.0, 200, 5, 3.0);
                let index = $build(points.clone());

                for _ in 0..100 {
                    let query = generate::rectangle(&mut rng, 0.0..100.0);
                    assert_matches_brute_force(&index, &points, &query);
                }
            }

            #[test]
            fn [<$name _integer_lattice>]() {
                // Many points lie exactly on query edges and splitting lines.
                let mut rng = StdRng::seed_from_u64(3);
                let mut points = grid(12);
                points.extend(grid(6));
                let index = $build(points.clone());

                for _ in 0..200 {
                    let [a, b] = [(); 2].map(|_| rand::Rng::gen_range(&mut rng, -1..14) as f64);
                    let [c, d] = [(); 2].map(|_| rand::Rng::gen_range(&mut rng, -1..14) as f64);
                    if let Ok(query) = Rectangle::new(a.min(b), a.max(b), c.min(d), c.max(d)) {
                        assert_matches_brute_force(&index, &points, &query);
                    }
                }
            }

            #[test]
            fn [<$name _boundary_exactness>]() {
                let points = grid(5);
                let index = $build(points.clone());
                let query = Rectangle::new(2.0, 4.0, 2.0, 4.0).unwrap();

                let found = sorted(index.query(&query));
                assert_eq!(found.len(), 4);
                assert!(found.iter().all(|p| p.x > 2.0 && p.y > 2.0));
                assert!(found.contains(&Point::new(4.0, 4.0)));
                assert!(!found.contains(&Point::new(2.0, 3.0)));
            }

            #[test]
            fn [<$name _duplicates_are_reported_each_time>]() {
                let mut points = grid(4);
                points.extend_from_slice(&[Point::new(2.0, 2.0); 3]);
                let index = $build(points.clone());

                let query = Rectangle::new(1.5, 2.5, 1.5, 2.5).unwrap();
                assert_eq!(index.query(&query), vec![Point::new(2.0, 2.0); 4]);
                assert_matches_brute_force(&index, &points, &query);
            }

            #[test]
            fn [<$name _idempotent_queries>]() {
                let mut rng = StdRng::seed_from_u64(4);
                let points = generate::points(&mut rng, 0.0..1.0, 500);
                let index = $build(points);

                let query = Rectangle::new(0.25, 0.75, 0.1, 0.6).unwrap();
                let first = sorted(index.query(&query));
                assert!(!first.is_empty());
                for _ in 0..3 {
                    assert_eq!(sorted(index.query(&query)), first);
                }
            }

            #[test]
            fn [<$name _disjoint_and_covering_queries>]() {
                let points = grid(7);
                let index = $build(points.clone());

                let far = Rectangle::new(50.0, 60.0, 50.0, 60.0).unwrap();
                assert!(index.query(&far).is_empty());

                let all = Rectangle::new(0.0, 10.0, 0.0, 10.0).unwrap();
                assert_eq!(sorted(index.query(&all)), points);
            }
        }
    };
}

fn kd_tree(points: Vec<Point>) -> KdTree {
    KdTree::new(points).unwrap()
}

fn kd_tree_widest(points: Vec<Point>) -> KdTree {
    KdTree::with_policy(points, SplitPolicy::WidestSpread).unwrap()
}

fn quadtree(points: Vec<Point>) -> Quadtree {
    Quadtree::new(points).unwrap()
}

range_search_suite!(kd_tree, kd_tree);
range_search_suite!(kd_tree_widest, kd_tree_widest);
range_search_suite!(quadtree, quadtree);
