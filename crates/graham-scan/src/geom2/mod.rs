//! 2D Graham scan building blocks.
//!
//! Pipeline
//! - `pivot`: lowest-then-rightmost point moved to position 0.
//! - `angular`: stable polar sort with a pure comparator, then one adjacency
//!   pass that drops points hidden on a shared ray and coincident duplicates.
//! - `sweep`: stack machine keeping only strict left turns.
//!
//! Numerics are plain `f64` orientation tests; no exact predicates.
//!
//! Code cross-refs: `crate::hull::convex_hull`

pub mod angular;
pub mod pivot;
pub mod rand;
pub mod sweep;
mod types;
mod util;

pub use angular::{hull_candidates, mark_redundant, sort_by_angle, PolarOrder, RAY_EPS};
pub use pivot::{lowest_index, select_pivot};
pub use sweep::{sweep, HullStack};
pub use types::{orientation, turn, CollinearPolicy, HullCfg, IndexedPoint, Point, Turn};
pub use util::{contains_point, is_strictly_convex, polygon_area2};
