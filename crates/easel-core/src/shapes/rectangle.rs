//! Rectangle shape.

use super::{ShapeId, next_shape_id};
use crate::geometry;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a signed span.
///
/// `width` and `height` keep the sign of the draw gesture: dragging up or
/// left of the anchor leaves them negative. Consumers that need positive
/// bounds normalize through [`Rectangle::as_rect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Anchor corner (where the draw gesture started).
    pub position: Point,
    /// Signed width; negative when drawn leftwards from the anchor.
    pub width: f64,
    /// Signed height; negative when drawn upwards from the anchor.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: next_shape_id(),
            position,
            width,
            height,
        }
    }

    /// Create a zero-size rectangle anchored at `point`.
    pub fn anchored(point: Point) -> Self {
        Self::new(point, 0.0, 0.0)
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The normalized kurbo rect covering the same area, whatever the sign
    /// of the span.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(
            self.position,
            self.position + Vec2::new(self.width, self.height),
        )
    }

    /// Whether `point` lies inside the rectangle, for any sign of the span.
    pub fn contains(&self, point: Point) -> bool {
        geometry::point_in_rect(point, self.position, self.width, self.height)
    }

    /// Translate the anchor by `delta`; the span is unchanged.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
