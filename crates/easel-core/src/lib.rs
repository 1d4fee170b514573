//! Easel Core Library
//!
//! Platform-agnostic shape model and pointer-interaction logic for the Easel
//! drawing surface.

pub mod geometry;
pub mod input;
pub mod shapes;
pub mod store;
pub mod surface;

pub use input::PointerEvent;
pub use shapes::{Line, Rectangle, Shape, ShapeId};
pub use store::ShapeStore;
pub use surface::{DRAG_HIT_TOLERANCE, Gesture, SURFACE_HEIGHT, SURFACE_WIDTH, Surface, Tool};
