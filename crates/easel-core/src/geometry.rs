//! Geometry helpers shared by hit-testing.

use kurbo::{Point, Vec2};

/// Distance from a point to a line segment (a-b).
///
/// The projection of `p` onto the carrying line is clamped to the segment,
/// so points past an endpoint measure to that endpoint. A degenerate
/// segment (`a == b`) measures as the Euclidean distance to `a`.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(p.x - a.x, p.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((p.x - proj.x).powi(2) + (p.y - proj.y).powi(2)).sqrt()
}

/// Whether `p` lies inside the rectangle spanned from `anchor` by
/// `(width, height)`. The span may be negative on either axis; bounds are
/// normalized per axis before the comparison.
pub fn point_in_rect(p: Point, anchor: Point, width: f64, height: f64) -> bool {
    let (x0, x1) = ordered(anchor.x, anchor.x + width);
    let (y0, y1) = ordered(anchor.y, anchor.y + height);
    p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
