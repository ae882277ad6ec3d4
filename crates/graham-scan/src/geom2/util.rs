use super::types::{orientation, Point};

/// Twice the signed area of a polygon (shoelace). Positive for CCW order.
pub fn polygon_area2(poly: &[Point]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|k| {
            let p = poly[k];
            let q = poly[(k + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}

/// On-or-inside test for a convex polygon in CCW order.
///
/// `eps` is absolute slack on the orientation value; pass `0.0` for the exact test.
pub fn contains_point(poly: &[Point], q: Point, eps: f64) -> bool {
    let n = poly.len();
    match n {
        0 => false,
        1 => (poly[0] - q).norm() <= eps,
        _ => (0..n).all(|k| orientation(poly[k], poly[(k + 1) % n], q) >= -eps),
    }
}

/// Every consecutive (wrapping) triple is a strict left turn.
pub fn is_strictly_convex(poly: &[Point]) -> bool {
    let n = poly.len();
    n >= 3
        && (0..n).all(|k| orientation(poly[k], poly[(k + 1) % n], poly[(k + 2) % n]) > 0.0)
}
