//! Angular ordering around the pivot, then removal of redundant points.
//!
//! Two explicit phases:
//! 1. `PolarOrder` maps each point once to a sort key (pseudo-angle, ray
//!    distance) and a stable sort orders by that key, then by input `id`.
//!    Keys are compared with `f64::total_cmp`, so the order is total even
//!    where rounding would make sign-of-orientation comparisons disagree.
//! 2. `mark_redundant` walks the sorted sequence once and flags every point that
//!    cannot be a hull vertex: copies of the pivot, points nearer to the pivot
//!    than another point on the same ray, and coincident duplicates (the lower
//!    `id` survives).
//!
//! Two directions whose angle differs by less than `RAY_EPS` (relative) count
//! as one ray. Below that scale neither the key nor `orientation` orders them
//! reliably, and keeping both lets the sweep zig-zag along the ray.
//!
//! The pivot is the lowest-then-rightmost point, so every other point lies at a
//! polar angle in (0, π]. Two points with zero orientation against the pivot
//! therefore share one ray, never opposite rays.

use std::cmp::Ordering;

use super::types::{orientation, IndexedPoint, Point};

/// Relative tolerance for two directions from the pivot to share a ray:
/// `|orientation(pivot, a, b)| <= RAY_EPS * |a - pivot| * |b - pivot|`.
pub const RAY_EPS: f64 = 1e-12;

/// Comparator carrying the fixed polar origin.
#[derive(Clone, Copy, Debug)]
pub struct PolarOrder {
    pub pivot: Point,
}

impl PolarOrder {
    #[inline]
    pub fn new(pivot: Point) -> Self {
        Self { pivot }
    }

    /// Monotone stand-in for the polar angle on (0, π]: `-dx / (|dx| + dy)`.
    ///
    /// Runs from -1 (angle 0) through 0 (straight up) to 1 (angle π). Copies of
    /// the pivot have no angle and map to `-inf` so they sort first.
    #[inline]
    pub fn pseudo_angle(&self, p: Point) -> f64 {
        let d = p - self.pivot;
        let l1 = d.x.abs() + d.y;
        if l1 == 0.0 {
            return f64::NEG_INFINITY;
        }
        // + 0.0 folds -0.0 into 0.0 for total_cmp
        -d.x / l1 + 0.0
    }

    /// L1 distance from the pivot; monotone along any single ray.
    #[inline]
    pub fn ray_distance(&self, p: Point) -> f64 {
        let d = p - self.pivot;
        d.x.abs() + d.y.abs()
    }

    /// `(pseudo_angle, ray_distance)` for `p`.
    #[inline]
    pub fn key(&self, p: Point) -> (f64, f64) {
        (self.pseudo_angle(p), self.ray_distance(p))
    }

    /// Total order: counterclockwise angle, then near to far, then `id`.
    pub fn cmp(&self, a: &IndexedPoint, b: &IndexedPoint) -> Ordering {
        cmp_keyed(self.key(a.p), a.id, self.key(b.p), b.id)
    }

    /// Distance order of two points on one ray from the pivot.
    ///
    /// Compares `|x - pivot.x|` and `|y - pivot.y|` componentwise; on a shared
    /// ray both components move together, and a vertical or horizontal ray
    /// still decides on the non-zero component.
    #[inline]
    pub fn ray_cmp(&self, a: Point, b: Point) -> Ordering {
        let dx = (a.x - self.pivot.x).abs() - (b.x - self.pivot.x).abs();
        let dy = (a.y - self.pivot.y).abs() - (b.y - self.pivot.y).abs();
        if dx < 0.0 || dy < 0.0 {
            Ordering::Less
        } else if dx > 0.0 || dy > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[inline]
fn cmp_keyed(ka: (f64, f64), ida: usize, kb: (f64, f64), idb: usize) -> Ordering {
    ka.0.total_cmp(&kb.0)
        .then(ka.1.total_cmp(&kb.1))
        .then(ida.cmp(&idb))
}

/// Stable sort of `points` by `PolarOrder` around `pivot`; keys computed once per point.
pub fn sort_by_angle(pivot: Point, points: &mut [IndexedPoint]) {
    let order = PolarOrder::new(pivot);
    let mut keyed: Vec<((f64, f64), IndexedPoint)> =
        points.iter().map(|&p| (order.key(p.p), p)).collect();
    keyed.sort_by(|(ka, a), (kb, b)| cmp_keyed(*ka, a.id, *kb, b.id));
    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }
}

/// Flag redundant points in a slice already sorted by `sort_by_angle`.
///
/// Each point is compared only with the last survivor before it, which on a
/// shared ray is the farthest point seen so far. Returns the number of points
/// newly marked.
pub fn mark_redundant(pivot: Point, sorted: &mut [IndexedPoint]) -> usize {
    let order = PolarOrder::new(pivot);
    let mut marked = 0usize;
    let mut survivor: Option<usize> = None;
    for i in 0..sorted.len() {
        if sorted[i].deleted {
            continue;
        }
        let cur = sorted[i].p;
        if cur == pivot {
            sorted[i].deleted = true;
            marked += 1;
            continue;
        }
        if let Some(k) = survivor {
            let prev = sorted[k].p;
            let area = orientation(pivot, prev, cur);
            let (dp, dc) = ((prev - pivot).norm(), (cur - pivot).norm());
            if area == 0.0 || area.abs() <= RAY_EPS * dp * dc {
                let prev_nearer = if area == 0.0 {
                    order.ray_cmp(prev, cur) == Ordering::Less
                } else {
                    dp < dc
                };
                if prev_nearer {
                    // prev lies between the pivot and cur
                    sorted[k].deleted = true;
                    survivor = Some(i);
                } else {
                    // coincident (the earlier entry has the lower id), or cur
                    // is nearer and its key only rounded past prev's
                    sorted[i].deleted = true;
                }
                marked += 1;
                continue;
            }
        }
        survivor = Some(i);
    }
    marked
}

/// Full candidate sequence: `[pivot] + filtered(sorted(rest))`.
///
/// Expects the pivot at position 0 (see `pivot::select_pivot`).
pub fn hull_candidates(pivoted: Vec<IndexedPoint>) -> Vec<IndexedPoint> {
    let mut iter = pivoted.into_iter();
    let Some(pivot) = iter.next() else {
        return Vec::new();
    };
    let mut rest: Vec<IndexedPoint> = iter.collect();
    sort_by_angle(pivot.p, &mut rest);
    let marked = mark_redundant(pivot.p, &mut rest);
    let mut out = Vec::with_capacity(rest.len() + 1 - marked);
    out.push(pivot);
    out.extend(rest.into_iter().filter(|p| !p.deleted));
    tracing::debug!(candidates = out.len(), dropped = marked, "angular sort");
    out
}
