//! Convex hull entry points.
//!
//! `convex_hull` runs pivot selection, the angular sort with redundancy
//! removal, and the stack sweep. The result is counterclockwise, starts at the
//! pivot (lowest y, then rightmost x), and never repeats the first vertex.
//!
//! Inputs that cannot produce a polygon are reported through `HullError`;
//! there is no partial result.

use std::fmt;

use crate::geom2::{
    hull_candidates, select_pivot, sweep, CollinearPolicy, HullCfg, IndexedPoint, Point,
};

/// Errors surfaced by the hull computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three input points.
    TooFewPoints { got: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { id: usize },
    /// Fewer than two distinct positions remain after deduplication.
    AllCoincident,
    /// All points lie on one line (only under `CollinearPolicy::Reject`).
    DegenerateInput,
}

impl HullError {
    /// Malformed input, as opposed to a well-formed but degenerate point set.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, HullError::DegenerateInput)
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::TooFewPoints { got } => {
                write!(f, "convex hull needs at least 3 points, got {}", got)
            }
            HullError::NonFinite { id } => {
                write!(f, "point {} has a non-finite coordinate", id)
            }
            HullError::AllCoincident => {
                write!(f, "fewer than 2 distinct points remain after deduplication")
            }
            HullError::DegenerateInput => write!(f, "all points are collinear"),
        }
    }
}

impl std::error::Error for HullError {}

/// Hull of `points` with the default configuration.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    convex_hull_with_cfg(points, HullCfg::default())
}

/// Hull of `points` under `cfg`.
pub fn convex_hull_with_cfg(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    Ok(convex_hull_indexed(points, cfg)?
        .into_iter()
        .map(|v| v.p)
        .collect())
}

/// Hull of `(x, y)` pairs with the default configuration.
pub fn convex_hull_coords(coords: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, HullError> {
    let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Ok(convex_hull(&points)?
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect())
}

/// Hull vertices tagged with their input index (`id`).
pub fn convex_hull_indexed(
    points: &[Point],
    cfg: HullCfg,
) -> Result<Vec<IndexedPoint>, HullError> {
    if points.len() < 3 {
        return Err(HullError::TooFewPoints { got: points.len() });
    }
    if let Some(id) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { id });
    }

    let tagged = IndexedPoint::tag_all(points);
    let pivoted = select_pivot(&tagged).ok_or(HullError::TooFewPoints {
        got: points.len(),
    })?;
    let candidates = hull_candidates(pivoted);
    let stack = sweep(&candidates).ok_or(HullError::AllCoincident)?;

    // Distinct rays from the pivot always yield a left turn against the base
    // edge, so a two-point stack means every point shares one ray (up to
    // `RAY_EPS`).
    if stack.len() < 3 {
        return match cfg.collinear {
            CollinearPolicy::Reject => Err(HullError::DegenerateInput),
            CollinearPolicy::Segment => Ok(stack.into_vec()),
        };
    }
    tracing::debug!(input = points.len(), vertices = stack.len(), "hull");
    Ok(stack.into_vec())
}
