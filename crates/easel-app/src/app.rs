//! Application state and the per-frame update loop.

use easel_core::{PointerEvent, SURFACE_HEIGHT, SURFACE_WIDTH, Surface, Tool};
use easel_render::{RenderContext, build_scene};
use egui::{CentralPanel, Context, CursorIcon, Pos2, Sense, TopBottomPanel, vec2};
use kurbo::Point;

use crate::paint::paint_scene;
use crate::toolbar::{ToolbarAction, render_toolbar};

/// The Easel application.
pub struct EaselApp {
    surface: Surface,
}

impl EaselApp {
    /// Create the application.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            surface: Surface::new(),
        }
    }

    fn apply(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SetTool(tool) => self.surface.set_tool(tool),
            ToolbarAction::ClearBoard => self.surface.clear_board(),
        }
    }
}

impl eframe::App for EaselApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let action = TopBottomPanel::top("toolbar")
            .show(ctx, |ui| render_toolbar(ui, self.surface.active_tool()))
            .inner;
        if let Some(action) = action {
            self.apply(action);
        }

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let tool = match self.surface.active_tool() {
                    Some(Tool::Line) => "Line",
                    Some(Tool::Square) => "Square",
                    Some(Tool::Drag) => "Drag",
                    None => "None",
                };
                ui.label(format!("Tool: {tool}"));
                ui.separator();
                ui.label(format!("Shapes: {}", self.surface.store().len()));
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(
                vec2(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32),
                Sense::drag(),
            );
            let canvas = response.rect;

            let mut redraw = false;
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    redraw |= self.surface.handle_pointer(PointerEvent::Down {
                        position: to_surface(canvas.min, pos),
                    });
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    // Leaving the surface mid-gesture commits it, like the
                    // pointer lifting would.
                    let event = if canvas.contains(pos) {
                        PointerEvent::Move {
                            position: to_surface(canvas.min, pos),
                        }
                    } else {
                        PointerEvent::Leave
                    };
                    redraw |= self.surface.handle_pointer(event);
                }
            } else if response.drag_stopped() {
                redraw |= self.surface.handle_pointer(PointerEvent::Up);
            }

            let scene = build_scene(&RenderContext::new(&self.surface));
            paint_scene(&painter, canvas, &scene);

            match self.surface.active_tool() {
                Some(Tool::Drag) => {
                    response.on_hover_cursor(CursorIcon::Grab);
                }
                Some(_) => {
                    response.on_hover_cursor(CursorIcon::Crosshair);
                }
                None => {}
            }

            if redraw {
                ctx.request_repaint();
            }
        });
    }
}

fn to_surface(origin: Pos2, pos: Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}
