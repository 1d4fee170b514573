//! Persisted shape sequence for the drawing surface.

use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Ordered collection of committed shapes.
///
/// Insertion order is draw order: later entries render on top of earlier
/// ones and win hit-test ties. The transient shape of an in-progress
/// gesture is never part of the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape. Ids come from the shared counter, so no two entries
    /// ever share one.
    pub fn add_shape(&mut self, shape: Shape) {
        debug_assert!(self.shapes.iter().all(|s| s.id() != shape.id()));
        self.shapes.push(shape);
    }

    /// Replace the shape with the given id by `updater(&old)`.
    /// Silently a no-op when no shape has that id.
    pub fn replace_shape(&mut self, id: ShapeId, updater: impl FnOnce(&Shape) -> Shape) {
        if let Some(pos) = self.shapes.iter().position(|s| s.id() == id) {
            self.shapes[pos] = updater(&self.shapes[pos]);
        }
    }

    /// Remove all shapes. Idempotent.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Shapes in draw order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Get a shape by its position in draw order.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Index of the topmost shape hit at `point`, scanning front to back so
    /// the most recently added shape wins ties. `line_tolerance` is the
    /// pick distance for line shapes.
    pub fn topmost_hit(&self, point: Point, line_tolerance: f64) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, s)| s.hit_test(point, line_tolerance))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Rectangle};

    #[test]
    fn test_add_preserves_order() {
        let mut store = ShapeStore::new();
        let a = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let b = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let (id_a, id_b) = (a.id(), b.id());

        store.add_shape(Shape::Rectangle(a));
        store.add_shape(Shape::Line(b));

        let ids: Vec<ShapeId> = store.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![id_a, id_b]);
    }

    #[test]
    fn test_replace_shape() {
        let mut store = ShapeStore::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 20.0, 20.0);
        let id = rect.id();
        store.add_shape(Shape::Rectangle(rect));

        store.replace_shape(id, |old| {
            let mut moved = old.clone();
            moved.translate(kurbo::Vec2::new(20.0, 15.0));
            moved
        });

        assert_eq!(store.len(), 1);
        if let Some(Shape::Rectangle(rect)) = store.get(0) {
            assert_eq!(rect.id(), id);
            assert_eq!(rect.position, Point::new(20.0, 15.0));
            assert!((rect.width - 20.0).abs() < f64::EPSILON);
            assert!((rect.height - 20.0).abs() < f64::EPSILON);
        } else {
            panic!("Expected Rectangle shape");
        }
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0)));

        // Never added, so its id is unknown to the store.
        let stray = Rectangle::new(Point::new(99.0, 99.0), 1.0, 1.0);
        store.replace_shape(stray.id(), |old| old.clone());

        assert_eq!(store.len(), 1);
        if let Some(Shape::Rectangle(rect)) = store.get(0) {
            assert_eq!(rect.position, Point::new(0.0, 0.0));
        } else {
            panic!("Expected Rectangle shape");
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0)));
        store.add_shape(Shape::Line(Line::new(Point::ZERO, Point::new(5.0, 5.0))));

        store.clear();
        assert!(store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_topmost_hit_prefers_last_added() {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0)));
        store.add_shape(Shape::Rectangle(Rectangle::new(Point::new(50.0, 50.0), 100.0, 100.0)));

        // Inside both: the later entry wins.
        assert_eq!(store.topmost_hit(Point::new(75.0, 75.0), 15.0), Some(1));
        // Inside the first only.
        assert_eq!(store.topmost_hit(Point::new(25.0, 25.0), 15.0), Some(0));
        // Inside neither.
        assert_eq!(store.topmost_hit(Point::new(300.0, 300.0), 15.0), None);
    }

    #[test]
    fn test_topmost_hit_line_tolerance_is_strict() {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))));

        assert_eq!(store.topmost_hit(Point::new(50.0, 14.9), 15.0), Some(0));
        assert_eq!(store.topmost_hit(Point::new(50.0, 15.0), 15.0), None);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::Line(Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0))));
        store.add_shape(Shape::Rectangle(Rectangle::new(Point::new(5.0, 6.0), -7.0, 8.0)));

        let json = serde_json::to_string(&store).unwrap();
        let restored: ShapeStore = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        let ids: Vec<ShapeId> = store.iter().map(|s| s.id()).collect();
        let restored_ids: Vec<ShapeId> = restored.iter().map(|s| s.id()).collect();
        assert_eq!(ids, restored_ids);
        if let Some(Shape::Rectangle(rect)) = restored.get(1) {
            assert!((rect.width + 7.0).abs() < f64::EPSILON);
        } else {
            panic!("Expected Rectangle shape");
        }
    }
}
