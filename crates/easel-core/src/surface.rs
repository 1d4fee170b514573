//! Drawing surface state and the pointer-interaction machine.

use crate::input::PointerEvent;
use crate::shapes::{Line, Rectangle, Shape, ShapeId};
use crate::store::ShapeStore;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Logical surface width in surface units.
pub const SURFACE_WIDTH: f64 = 1000.0;
/// Logical surface height in surface units.
pub const SURFACE_HEIGHT: f64 = 800.0;
/// Pick distance for grabbing a line with the drag tool. A hit must be
/// strictly closer than this.
pub const DRAG_HIT_TOLERANCE: f64 = 15.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Draw straight line segments.
    Line,
    /// Draw rectangles from an anchor corner.
    Square,
    /// Grab and move an existing shape.
    Drag,
}

/// State of the current pointer gesture.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A new shape is being drawn; it lives here until commit.
    Drawing {
        /// The transient shape, free endpoint tracking the pointer.
        shape: Shape,
    },
    /// A persisted shape is being moved.
    Dragging {
        /// Position of the dragged shape in the store.
        index: usize,
        /// The shape frozen at grab time; every translation starts from it.
        grabbed: Shape,
        /// Pointer position at grab time relative to the shape's reference
        /// point.
        grab_offset: Vec2,
    },
}

/// The drawing surface: the persisted shape sequence plus interaction state.
///
/// All pointer events enter through [`Surface::handle_pointer`]. The tool
/// selector writes only the active tool; the clear control resets
/// everything. Renderers take the surface by immutable borrow and read
/// [`Surface::store`], [`Surface::transient`] and [`Surface::shadowed`].
#[derive(Debug, Clone, Default)]
pub struct Surface {
    store: ShapeStore,
    tool: Option<Tool>,
    gesture: Gesture,
}

impl Surface {
    /// Create an empty surface with no tool selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted shape sequence.
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// The current gesture state.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The active tool, if any.
    pub fn active_tool(&self) -> Option<Tool> {
        self.tool
    }

    /// Select a tool (or none). A gesture in progress is never disturbed;
    /// the new tool takes effect on the next pointer down.
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.tool = tool;
    }

    /// Remove every shape and reset the gesture. Idempotent.
    pub fn clear_board(&mut self) {
        log::info!("clearing surface ({} shapes)", self.store.len());
        self.store.clear();
        self.gesture = Gesture::Idle;
    }

    /// The shape to draw on top of the persisted sequence: the in-progress
    /// preview while drawing, or the live copy of the shape being dragged.
    pub fn transient(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Drawing { shape } => Some(shape),
            Gesture::Dragging { index, .. } => self.store.get(*index),
        }
    }

    /// Id of the persisted entry shadowed by the transient copy (the shape
    /// being dragged). Renderers skip it so the shape draws once, on top.
    pub fn shadowed(&self) -> Option<ShapeId> {
        match &self.gesture {
            Gesture::Dragging { grabbed, .. } => Some(grabbed.id()),
            _ => None,
        }
    }

    /// Feed one pointer event through the machine.
    ///
    /// Returns true when the store or the transient shape changed and the
    /// host should repaint. Events that touch nothing (no tool selected,
    /// hit-test miss, pointer activity while idle) return false. Redundant
    /// moves are harmless; they just rewrite the same coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position } => self.on_down(position),
            PointerEvent::Move { position } => self.on_move(position),
            PointerEvent::Up | PointerEvent::Leave => self.finish_gesture(),
        }
    }

    fn on_down(&mut self, position: Point) -> bool {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            // A second press cannot arrive from a single pointer; ignore it
            // rather than abandon the drag.
            return false;
        }
        // A fresh press supersedes an unfinished drawing gesture: the
        // uncommitted transient is discarded and the current tool decides
        // what starts here.
        match self.tool {
            Some(Tool::Line) => {
                log::debug!("begin line at ({}, {})", position.x, position.y);
                self.gesture = Gesture::Drawing {
                    shape: Shape::Line(Line::anchored(position)),
                };
                true
            }
            Some(Tool::Square) => {
                log::debug!("begin square at ({}, {})", position.x, position.y);
                self.gesture = Gesture::Drawing {
                    shape: Shape::Rectangle(Rectangle::anchored(position)),
                };
                true
            }
            Some(Tool::Drag) => self.begin_drag(position),
            None => false,
        }
    }

    fn begin_drag(&mut self, position: Point) -> bool {
        let Some(index) = self.store.topmost_hit(position, DRAG_HIT_TOLERANCE) else {
            return false;
        };
        let Some(grabbed) = self.store.get(index).cloned() else {
            return false;
        };
        let grab_offset = position - grabbed.reference_point();
        log::debug!("grab shape {:?} at index {index}", grabbed.id());
        self.gesture = Gesture::Dragging {
            index,
            grabbed,
            grab_offset,
        };
        true
    }

    fn on_move(&mut self, position: Point) -> bool {
        match &mut self.gesture {
            Gesture::Idle => false,
            Gesture::Drawing { shape } => {
                match shape {
                    Shape::Line(line) => line.end = position,
                    Shape::Rectangle(rect) => {
                        rect.width = position.x - rect.position.x;
                        rect.height = position.y - rect.position.y;
                    }
                }
                true
            }
            Gesture::Dragging {
                grabbed,
                grab_offset,
                ..
            } => {
                let delta = (position - *grab_offset) - grabbed.reference_point();
                let mut moved = grabbed.clone();
                moved.translate(delta);
                let id = moved.id();
                self.store.replace_shape(id, move |_| moved);
                true
            }
        }
    }

    /// Release and surface-leave end a gesture the same way: a drawing is
    /// committed, a drag keeps the position already written to the store.
    /// A dragged shape is never appended a second time.
    fn finish_gesture(&mut self) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => false,
            Gesture::Drawing { shape } => {
                log::debug!("commit shape {:?}", shape.id());
                self.store.add_shape(shape);
                true
            }
            Gesture::Dragging { grabbed, .. } => {
                log::debug!("drop shape {:?}", grabbed.id());
                true
            }
        }
    }
}
