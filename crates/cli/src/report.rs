use anyhow::{Context, Result};
use graham_scan::geom2::polygon_area2;
use graham_scan::{convex_hull_indexed, HullCfg, Point};
use serde::Serialize;
use std::path::Path;

/// JSON summary of one hull run.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub input_points: usize,
    pub vertices: usize,
    /// CCW from the pivot, no closing repeat.
    pub hull: Vec<[f64; 2]>,
    /// Input row of each hull vertex.
    pub hull_ids: Vec<usize>,
    pub area: f64,
}

impl HullReport {
    pub fn compute(points: &[Point], cfg: HullCfg) -> Result<Self> {
        let hull = convex_hull_indexed(points, cfg).context("computing convex hull")?;
        let ring: Vec<Point> = hull.iter().map(|v| v.p).collect();
        Ok(Self {
            input_points: points.len(),
            vertices: hull.len(),
            hull: ring.iter().map(|p| [p.x, p.y]).collect(),
            hull_ids: hull.iter().map(|v| v.id).collect(),
            area: 0.5 * polygon_area2(&ring),
        })
    }

    pub fn write(&self, out: &str) -> Result<()> {
        let out_path = Path::new(out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out_path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {out}"))?;
        Ok(())
    }
}
