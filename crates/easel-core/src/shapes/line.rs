//! Line shape.

use super::{ShapeId, next_shape_id};
use crate::geometry;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point (the draw-gesture anchor).
    pub start: Point,
    /// End point (tracks the pointer while drawing).
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: next_shape_id(),
            start,
            end,
        }
    }

    /// Create a zero-length line anchored at `point`, both endpoints equal.
    pub fn anchored(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Hit when the point is strictly closer to the segment than
    /// `tolerance`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        geometry::distance_point_to_segment(point, self.start, self.end) < tolerance
    }

    /// Translate both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_anchored_line_is_zero_length() {
        let line = Line::anchored(Point::new(42.0, 17.0));
        assert_eq!(line.start, line.end);
        assert!(line.length().abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_on_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 0.0), 1.0));
        assert!(line.hit_test(Point::new(50.0, 2.0), 5.0));
        assert!(!line.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_hit_test_tolerance_is_strict() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 14.9), 15.0));
        assert!(!line.hit_test(Point::new(50.0, 15.0), 15.0));
    }

    #[test]
    fn test_hit_test_endpoints() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(0.0, 0.0), 1.0));
        assert!(line.hit_test(Point::new(100.0, 0.0), 1.0));
    }

    #[test]
    fn test_hit_test_degenerate_line() {
        // Both endpoints coincide; distance degrades to point distance.
        let line = Line::anchored(Point::new(10.0, 10.0));
        assert!(line.hit_test(Point::new(12.0, 10.0), 5.0));
        assert!(!line.hit_test(Point::new(20.0, 10.0), 5.0));
    }

    #[test]
    fn test_translate_moves_both_endpoints() {
        let mut line = Line::new(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        let length = line.length();
        line.translate(Vec2::new(5.0, -10.0));
        assert_eq!(line.start, Point::new(15.0, 10.0));
        assert_eq!(line.end, Point::new(55.0, 70.0));
        assert!((line.length() - length).abs() < f64::EPSILON);
    }
}
