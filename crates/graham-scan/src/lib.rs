//! Planar convex hulls via Graham scan.
//!
//! Pipeline: pick the lowest-then-rightmost pivot, sort the rest by polar
//! angle around it, drop points hidden on a shared ray, then sweep with a
//! stack that keeps only strict left turns.
//!
//! The crate is pure computation: no I/O, no rendering. The `cli` crate in
//! this workspace handles reading points and writing reports.

pub mod demo;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{orientation, CollinearPolicy, HullCfg, IndexedPoint, Point};
pub use hull::{
    convex_hull, convex_hull_coords, convex_hull_indexed, convex_hull_with_cfg, HullError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{
        contains_point, is_strictly_convex, orientation, polygon_area2, turn, CollinearPolicy,
        HullCfg, IndexedPoint, Point, Turn,
    };
    pub use crate::hull::{
        convex_hull, convex_hull_coords, convex_hull_indexed, convex_hull_with_cfg, HullError,
    };
}

#[cfg(test)]
mod props;
