//! Toolbar row with tool toggles and the clear button.

use easel_core::Tool;
use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Ui, vec2};

/// Background for the active tool button.
const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);

/// An action triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Change the active tool, or put it away.
    SetTool(Option<Tool>),
    /// Delete every shape on the board.
    ClearBoard,
}

/// Render the toolbar and return any triggered action.
///
/// The leading `Tools` button puts the active tool away; it reads as
/// selected while no tool is active.
pub fn render_toolbar(ui: &mut Ui, active_tool: Option<Tool>) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 0.0);

        if tool_button(ui, "Tools", active_tool.is_none()) {
            action = Some(ToolbarAction::SetTool(None));
        }
        for (label, tool) in [
            ("Square", Tool::Square),
            ("Line", Tool::Line),
            ("Drag", Tool::Drag),
        ] {
            if tool_button(ui, label, active_tool == Some(tool)) {
                action = Some(ToolbarAction::SetTool(Some(tool)));
            }
        }

        ui.separator();

        if tool_button(ui, "Clear", false) {
            action = Some(ToolbarAction::ClearBoard);
        }
    });

    action
}

/// A text toggle button with a solid accent background when selected.
fn tool_button(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let font_id = egui::FontId::proportional(12.0);
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        font_id.clone(),
        Color32::PLACEHOLDER, // Color doesn't matter for sizing
    );
    let size = vec2(galley.size().x + 16.0, 24.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if selected {
            ACCENT
        } else if response.hovered() {
            Color32::from_gray(235)
        } else {
            Color32::from_gray(245)
        };
        let text_color = if selected {
            Color32::WHITE
        } else {
            Color32::from_gray(80)
        };

        ui.painter()
            .rect_filled(rect, CornerRadius::same(4), bg_color);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            font_id,
            text_color,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}
