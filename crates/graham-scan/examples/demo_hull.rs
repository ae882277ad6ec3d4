//! Print the hull of the 19-point demo set.
//!
//! Usage:
//!   cargo run -p graham-scan --example demo_hull

use graham_scan::demo::demo_points;
use graham_scan::geom2::polygon_area2;
use graham_scan::{convex_hull_indexed, HullCfg};

fn main() {
    let pts = demo_points();
    match convex_hull_indexed(&pts, HullCfg::default()) {
        Ok(hull) => {
            println!("{} input points, {} hull vertices (CCW):", pts.len(), hull.len());
            for v in &hull {
                println!("  #{:<2} ({:>5.2}, {:>5.2})", v.id, v.p.x, v.p.y);
            }
            let ring: Vec<_> = hull.iter().map(|v| v.p).collect();
            println!("area = {:.2}", 0.5 * polygon_area2(&ring));
        }
        Err(e) => eprintln!("hull failed: {e}"),
    }
}
