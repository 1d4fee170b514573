//! Easel Render Library
//!
//! Backend-agnostic scene construction for the Easel drawing surface. A
//! scene is a plain display list rebuilt from scratch each frame; any
//! painter can replay it.

mod renderer;

pub use renderer::{PaintOp, RenderContext, Scene, StrokeStyle, build_scene};
