//! Frame description and scene building.

use easel_core::{Shape, Surface};
use kurbo::{Point, Rect};
use peniko::Color;

/// Stroke applied to every shape outline.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 255),
            width: 2.0,
        }
    }
}

/// Context for building one frame.
pub struct RenderContext<'a> {
    /// Surface whose shapes are rendered.
    pub surface: &'a Surface,
    /// Color the frame is erased to before any shape is stroked.
    pub background: Color,
    /// Outline stroke shared by all shapes.
    pub stroke: StrokeStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a render context with the default black-on-white styling.
    pub fn new(surface: &'a Surface) -> Self {
        Self {
            surface,
            background: Color::from_rgba8(255, 255, 255, 255),
            stroke: StrokeStyle::default(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

/// One drawing command of a built scene.
#[derive(Debug, Clone, Copy)]
pub enum PaintOp {
    /// Stroke a line segment.
    Line {
        from: Point,
        to: Point,
        stroke: StrokeStyle,
    },
    /// Stroke a rectangle outline. The rect is normalized to a positive span.
    Rect { rect: Rect, stroke: StrokeStyle },
}

/// Display list for one frame, replayed in order over the background.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Color the frame is cleared to.
    pub background: Color,
    /// Drawing commands in paint order.
    pub ops: Vec<PaintOp>,
}

/// Build the scene for the current frame.
///
/// Persisted shapes are emitted in insertion order, skipping the store entry
/// shadowed by an active drag; the transient shape is emitted last so the
/// live preview paints on top of everything.
pub fn build_scene(ctx: &RenderContext) -> Scene {
    let mut ops = Vec::with_capacity(ctx.surface.store().len() + 1);
    let shadowed = ctx.surface.shadowed();
    for shape in ctx.surface.store().iter() {
        if shadowed == Some(shape.id()) {
            continue;
        }
        push_shape(&mut ops, shape, ctx.stroke);
    }
    if let Some(shape) = ctx.surface.transient() {
        push_shape(&mut ops, shape, ctx.stroke);
    }
    Scene {
        background: ctx.background,
        ops,
    }
}

fn push_shape(ops: &mut Vec<PaintOp>, shape: &Shape, stroke: StrokeStyle) {
    match shape {
        Shape::Line(line) => {
            // A zero-length line has nothing to stroke.
            if line.start == line.end {
                return;
            }
            ops.push(PaintOp::Line {
                from: line.start,
                to: line.end,
                stroke,
            });
        }
        Shape::Rectangle(rect) => ops.push(PaintOp::Rect {
            rect: rect.as_rect(),
            stroke,
        }),
    }
}
