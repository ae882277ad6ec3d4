//! Random point clouds in 2D (uniform disk or integer lattice + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for benchmarks, property tests, and the CLI `random`
//!   subcommand. A cloud is fully determined by `(CloudCfg, ReplayToken)`.
//!
//! Model
//! - `Disk`: points uniform in a disk of radius `radius` (sqrt-radius trick).
//! - `Lattice`: integer points in `[-half, half]²`; produces plenty of
//!   duplicates and collinear triples, which is what the hull has to survive.
//!
//! Code cross-refs: `hull::convex_hull`

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Disk { radius: f64 },
    Lattice { half: i32 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Translation applied after sampling.
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            shape: CloudShape::Disk { radius: 1.0 },
            center: Point::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| sample_one(&mut rng, cfg.shape) + cfg.center)
        .collect()
}

fn sample_one<R: Rng>(rng: &mut R, shape: CloudShape) -> Point {
    match shape {
        CloudShape::Disk { radius } => {
            let r = radius.max(0.0) * rng.gen::<f64>().sqrt();
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            Point::new(r * theta.cos(), r * theta.sin())
        }
        CloudShape::Lattice { half } => {
            let h = half.abs();
            Point::new(
                rng.gen_range(-h..=h) as f64,
                rng.gen_range(-h..=h) as f64,
            )
        }
    }
}
