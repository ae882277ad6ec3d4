//! Pivot selection: lowest y, rightmost among ties.
//!
//! The chosen point is always a hull vertex, so it can anchor the polar sort.

use super::types::IndexedPoint;

/// Index of the lowest point (smallest y, then largest x).
///
/// Exact duplicates keep the first occurrence, so the pivot carries the lowest
/// `id` among its coincident copies. Returns `None` for an empty slice.
pub fn lowest_index(points: &[IndexedPoint]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut m, mut best) = iter.next()?;
    for (i, cand) in iter {
        if cand.p.y < best.p.y || (cand.p.y == best.p.y && cand.p.x > best.p.x) {
            m = i;
            best = cand;
        }
    }
    Some(m)
}

/// Copy of `points` with the pivot swapped into position 0.
///
/// The input slice is left untouched.
pub fn select_pivot(points: &[IndexedPoint]) -> Option<Vec<IndexedPoint>> {
    let m = lowest_index(points)?;
    let mut out = points.to_vec();
    out.swap(0, m);
    tracing::debug!(id = out[0].id, x = out[0].p.x, y = out[0].p.y, "pivot");
    Some(out)
}
