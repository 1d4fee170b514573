//! Shape definitions for the drawing surface.

mod line;
mod rectangle;

pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for shapes.
///
/// Ids come from a process-wide counter and are strictly increasing in
/// creation order. They are identity only; draw order is the store's
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(u64);

/// Allocate the next shape id.
pub(crate) fn next_shape_id() -> ShapeId {
    static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);
    ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst))
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
        }
    }

    /// Check if a point (in surface coordinates) hits this shape.
    /// `line_tolerance` applies to lines only; a rectangle hits anywhere
    /// inside its span.
    pub fn hit_test(&self, point: Point, line_tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point, line_tolerance),
            Shape::Rectangle(s) => s.contains(point),
        }
    }

    /// Translate the shape rigidly by `delta`. Size and id are unchanged.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Rectangle(s) => s.translate(delta),
        }
    }

    /// Reference point a drag anchors to: the anchor corner for rectangles,
    /// the coordinate origin for lines.
    pub fn reference_point(&self) -> Point {
        match self {
            Shape::Line(_) => Point::ZERO,
            Shape::Rectangle(s) => s.position,
        }
    }
}
