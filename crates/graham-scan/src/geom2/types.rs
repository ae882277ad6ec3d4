//! Basic 2D types and the orientation predicate.
//!
//! - `Point`: plain `Vector2<f64>`, immutable once created.
//! - `IndexedPoint`: a point plus its input position `id` and a `deleted` mark.
//! - `orientation`/`turn`: signed-area test shared by the angular sort and the sweep.
//! - `HullCfg`: behavior knobs for inputs the algorithm cannot answer on its own.
//!
//! Code cross-refs: `pivot::select_pivot`, `angular::{sort_by_angle, mark_redundant}`, `sweep::sweep`

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive for a→b→c turning left (counterclockwise), negative for a right
/// turn, zero when the three points are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Turn direction of a→b→c.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Collinear,
    Right,
}

/// Classify a→b→c by the sign of `orientation`.
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> Turn {
    let area = orientation(a, b, c);
    if area > 0.0 {
        Turn::Left
    } else if area < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Input point tagged with its position in the caller's sequence.
///
/// Invariants:
/// - `id` is unique per call and equals the input index.
/// - `id` only breaks ties; it never enters a geometric computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedPoint {
    pub id: usize,
    pub p: Point,
    pub deleted: bool,
}

impl IndexedPoint {
    #[inline]
    pub fn new(id: usize, p: Point) -> Self {
        Self {
            id,
            p,
            deleted: false,
        }
    }

    /// Tag a slice of raw points with their input order.
    pub fn tag_all(points: &[Point]) -> Vec<IndexedPoint> {
        points
            .iter()
            .enumerate()
            .map(|(id, &p)| IndexedPoint::new(id, p))
            .collect()
    }
}

/// What to return when every input point lies on one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Fail with `HullError::DegenerateInput`.
    #[default]
    Reject,
    /// Return the two extreme points `[pivot, farthest]`.
    Segment,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
}

impl HullCfg {
    /// Accept all-collinear input and answer with its bounding segment.
    #[inline]
    pub fn segment() -> Self {
        Self {
            collinear: CollinearPolicy::Segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn orientation_signs() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(orientation(a, b, vector![1.0, 1.0]) > 0.0);
        assert!(orientation(a, b, vector![1.0, -1.0]) < 0.0);
        assert_eq!(orientation(a, b, vector![3.0, 0.0]), 0.0);
        assert_eq!(turn(a, b, vector![-2.0, 0.0]), Turn::Collinear);
    }

    #[test]
    fn orientation_is_twice_triangle_area() {
        // right triangle with legs 4 and 3
        let area2 = orientation(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]);
        assert!((area2 - 12.0).abs() < 1e-12);
    }

    #[test]
    fn orientation_antisymmetric_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut draw = || Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let (a, b, c) = (draw(), draw(), draw());
            let fwd = orientation(a, b, c);
            let rev = orientation(a, c, b);
            assert!((fwd + rev).abs() < 1e-9);
        }
    }

    #[test]
    fn tag_all_keeps_input_order() {
        let pts = vec![vector![1.0, 2.0], vector![3.0, 4.0]];
        let tagged = IndexedPoint::tag_all(&pts);
        assert_eq!(tagged[1].id, 1);
        assert_eq!(tagged[1].p, pts[1]);
        assert!(!tagged[0].deleted);
    }
}
