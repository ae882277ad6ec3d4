//! Property tests for the hull: convexity, containment, minimality,
//! permutation invariance, idempotence, float robustness.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use crate::geom2::{contains_point, is_strictly_convex, orientation, Point};
use crate::hull::{convex_hull, HullError};

/// Small integer grid keeps orientation tests exact and makes duplicates and
/// collinear triples common.
fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-6i32..=6, -6i32..=6), 3..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

/// Uniform disk clouds with arbitrary float coordinates, plus the radius.
fn disk_cloud() -> impl Strategy<Value = (Vec<Point>, f64)> {
    (any::<u64>(), 0u64..64, 3usize..300, 1.0f64..100.0).prop_map(|(seed, index, count, radius)| {
        let cfg = CloudCfg {
            count,
            shape: CloudShape::Disk { radius },
            ..CloudCfg::default()
        };
        (draw_cloud(cfg, ReplayToken::new(seed, index)), radius)
    })
}

/// Points scattered along one line with tiny relative jitter, plus one apex
/// off the line so the hull is never degenerate.
fn near_collinear() -> impl Strategy<Value = Vec<Point>> {
    let jitter = prop_oneof![Just(0.0), Just(1e-15), Just(1e-13), Just(1e-11)];
    (
        (-10.0f64..10.0, -10.0f64..10.0),
        0.0f64..std::f64::consts::PI,
        jitter,
        prop::collection::vec((-20.0f64..20.0, -1.0f64..1.0, -1.0f64..1.0), 2..120),
        (0.5f64..10.0, any::<bool>(), -20.0f64..20.0),
        any::<prop::sample::Index>(),
    )
        .prop_map(|((bx, by), theta, jitter, line, (h, flip, s), at)| {
            let base = Point::new(bx, by);
            let dir = Point::new(theta.cos(), theta.sin());
            let normal = Point::new(-dir.y, dir.x);
            let mut pts: Vec<Point> = line
                .into_iter()
                .map(|(t, nx, ny)| base + dir * t + Point::new(nx, ny) * (jitter * t.abs()))
                .collect();
            let h = if flip { -h } else { h };
            let k = at.index(pts.len() + 1);
            pts.insert(k, base + dir * s + normal * h);
            pts
        })
}

/// Convex within `eps`, covers `input` within `eps`, and uses only input points.
fn assert_float_hull(input: &[Point], hull: &[Point], eps: f64) -> Result<(), TestCaseError> {
    let n = hull.len();
    prop_assert!(n >= 3, "{:?}", hull);
    for k in 0..n {
        let turn = orientation(hull[k], hull[(k + 1) % n], hull[(k + 2) % n]);
        prop_assert!(turn > -eps, "reflex at {}: {}", k, turn);
    }
    for &q in input {
        prop_assert!(contains_point(hull, q, eps), "{:?} outside", q);
    }
    for v in hull {
        prop_assert!(input.contains(v));
    }
    Ok(())
}

fn sorted_set(points: &[Point]) -> Vec<(i64, i64)> {
    let mut v: Vec<(i64, i64)> = points.iter().map(|p| (p.x as i64, p.y as i64)).collect();
    v.sort_unstable();
    v.dedup();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn hull_is_strictly_convex_and_contains_input(input in grid_points()) {
        match convex_hull(&input) {
            Ok(hull) => {
                prop_assert!(is_strictly_convex(&hull));
                for &q in &input {
                    prop_assert!(contains_point(&hull, q, 0.0));
                }
                for v in &hull {
                    prop_assert!(input.contains(v));
                }
            }
            Err(err) => {
                // only degenerate sets may fail
                let p0 = input[0];
                let far = input.iter().copied().find(|&p| p != p0);
                match far {
                    None => prop_assert_eq!(err, HullError::AllCoincident),
                    Some(p1) => {
                        prop_assert_eq!(err, HullError::DegenerateInput);
                        prop_assert!(input.iter().all(|&q| orientation(p0, p1, q) == 0.0));
                    }
                }
            }
        }
    }

    #[test]
    fn every_vertex_is_needed(input in grid_points()) {
        if let Ok(hull) = convex_hull(&input) {
            // removing a vertex uncovers that vertex itself
            for k in 0..hull.len() {
                let reduced: Vec<Point> = hull
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != k)
                    .map(|(_, &p)| p)
                    .collect();
                prop_assert!(!contains_point(&reduced, hull[k], 0.0));
            }
        }
    }

    #[test]
    fn permutation_keeps_vertex_set_and_start(
        (input, perm) in grid_points().prop_flat_map(|v| {
            let n = v.len();
            (Just(v), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        })
    ) {
        let shuffled: Vec<Point> = perm.iter().map(|&i| input[i]).collect();
        match (convex_hull(&input), convex_hull(&shuffled)) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(sorted_set(&a), sorted_set(&b));
                prop_assert_eq!(a[0], b[0]);
            }
            (Err(ea), Err(eb)) => prop_assert_eq!(ea, eb),
            (a, b) => prop_assert!(false, "mismatch: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn hull_of_hull_is_itself(input in grid_points()) {
        if let Ok(hull) = convex_hull(&input) {
            let again = convex_hull(&hull).unwrap();
            prop_assert_eq!(again, hull);
        }
    }

    #[test]
    fn disk_clouds_give_convex_covering_hulls((input, radius) in disk_cloud()) {
        let hull = convex_hull(&input);
        prop_assert!(hull.is_ok(), "{:?}", hull);
        let hull = hull.unwrap();
        assert_float_hull(&input, &hull, 1e-9 * radius * radius)?;
    }

    #[test]
    fn near_collinear_points_give_convex_covering_hulls(input in near_collinear()) {
        let hull = convex_hull(&input);
        prop_assert!(hull.is_ok(), "{:?}", hull);
        let hull = hull.unwrap();
        assert_float_hull(&input, &hull, 1e-6)?;
    }
}
