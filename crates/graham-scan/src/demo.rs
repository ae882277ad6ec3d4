//! Fixed 19-point demo set (mixed interior, boundary, and collinear points).

use crate::geom2::Point;

/// Demo coordinates in input order.
pub const DEMO_COORDS: [(f64, f64); 19] = [
    (3.0, -2.0),
    (5.0, 1.0),
    (7.0, 4.0),
    (6.0, 5.0),
    (4.0, 2.0),
    (3.0, 3.0),
    (3.0, 5.0),
    (2.0, 5.0),
    (0.0, 5.0),
    (0.0, 1.0),
    (-3.0, 4.0),
    (-2.0, 2.0),
    (0.0, 0.0),
    (-3.0, 2.0),
    (-5.0, 2.0),
    (-5.0, 1.0),
    (-5.0, -1.0),
    (1.0, -2.0),
    (-3.0, -2.0),
];

/// Demo set as points.
pub fn demo_points() -> Vec<Point> {
    DEMO_COORDS.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
