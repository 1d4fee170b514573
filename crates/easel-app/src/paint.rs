//! Replays a built scene onto an egui painter.

use easel_render::{PaintOp, Scene, StrokeStyle};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, StrokeKind};
use kurbo::Point;

/// Paint a scene into `canvas`, with the surface origin at the rect's
/// top-left corner.
pub fn paint_scene(painter: &Painter, canvas: Rect, scene: &Scene) {
    painter.rect_filled(canvas, CornerRadius::ZERO, color32(scene.background));

    let origin = canvas.min;
    for op in &scene.ops {
        match *op {
            PaintOp::Line { from, to, stroke } => {
                painter.line_segment(
                    [to_screen(origin, from), to_screen(origin, to)],
                    egui_stroke(stroke),
                );
            }
            PaintOp::Rect { rect, stroke } => {
                let rect = Rect::from_min_max(
                    to_screen(origin, Point::new(rect.x0, rect.y0)),
                    to_screen(origin, Point::new(rect.x1, rect.y1)),
                );
                painter.rect_stroke(rect, CornerRadius::ZERO, egui_stroke(stroke), StrokeKind::Middle);
            }
        }
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn egui_stroke(stroke: StrokeStyle) -> Stroke {
    Stroke::new(stroke.width as f32, color32(stroke.color))
}

fn color32(color: peniko::Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}
