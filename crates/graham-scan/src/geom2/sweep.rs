//! Stack sweep over the angularly sorted candidates.
//!
//! Invariants:
//! - The stack is seeded with the pivot and the first candidate. The pivot is
//!   never popped; the second point is only replaced by a farther point that
//!   fails to turn left off the base edge (same ray up to rounding).
//! - A point is pushed only after a strict left turn, so the final stack
//!   (bottom to top) is a counterclockwise hull without collinear triples.

use super::types::{orientation, IndexedPoint};

/// Array-backed LIFO of hull vertices.
#[derive(Clone, Debug, Default)]
pub struct HullStack {
    items: Vec<IndexedPoint>,
}

impl HullStack {
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
        }
    }
    #[inline]
    pub fn push(&mut self, p: IndexedPoint) {
        self.items.push(p);
    }
    #[inline]
    pub fn pop(&mut self) -> Option<IndexedPoint> {
        self.items.pop()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// `(second_from_top, top)` if the stack holds at least two points.
    #[inline]
    pub fn top_two(&self) -> Option<(&IndexedPoint, &IndexedPoint)> {
        match self.items.as_slice() {
            [.., a, b] => Some((a, b)),
            _ => None,
        }
    }
    /// Contents from bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[IndexedPoint] {
        &self.items
    }
    #[inline]
    pub fn into_vec(self) -> Vec<IndexedPoint> {
        self.items
    }
}

/// Run the Graham sweep over `candidates` (pivot first, then polar order).
///
/// Returns `None` when fewer than two candidates are supplied; the base edge
/// cannot be formed.
pub fn sweep(candidates: &[IndexedPoint]) -> Option<HullStack> {
    let (base, rest) = match candidates {
        [a, b, rest @ ..] => ([*a, *b], rest),
        _ => return None,
    };
    let mut stack = HullStack::with_capacity(candidates.len());
    stack.push(base[0]);
    stack.push(base[1]);

    let mut i = 0usize;
    while i < rest.len() {
        let next = rest[i];
        let (p1, p2) = stack.top_two()?;
        if orientation(p1.p, p2.p, next.p) > 0.0 {
            stack.push(next);
            i += 1;
        } else if stack.len() > 2 {
            let popped = stack.pop();
            tracing::trace!(id = popped.map(|p| p.id), "pop");
        } else {
            // Non-left turn on the base edge: `next` and the top share a ray up
            // to rounding. Keep whichever lies farther from the pivot.
            let pivot = base[0].p;
            let top = *p2;
            if (next.p - pivot).norm_squared() > (top.p - pivot).norm_squared() {
                stack.pop();
                stack.push(next);
            }
            tracing::trace!(top = top.id, next = next.id, "base edge tie");
            i += 1;
        }
    }
    Some(stack)
}
