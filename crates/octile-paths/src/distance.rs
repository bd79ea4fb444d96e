use octile_core::Point;

use crate::cost::{CARDINAL_COST, DIAGONAL_COST};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points, truncated to an integer.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt() as i32
}

/// Octile distance between two points, in movement-cost units:
/// [`DIAGONAL_COST`] per diagonal step plus [`CARDINAL_COST`] per leftover
/// straight step. Equals the cost of the cheapest obstacle-free 8-way route.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + CARDINAL_COST * (hi - lo)
}
