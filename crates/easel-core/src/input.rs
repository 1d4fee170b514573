//! Pointer events delivered by the host surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are surface-local logical coordinates, origin at the top-left
/// corner. The host delivers events strictly in the order it observed them;
/// coordinates outside the surface bounds are passed through unclamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button pressed at `position`.
    Down { position: Point },
    /// Pointer moved to `position` while over the surface.
    Move { position: Point },
    /// Primary button released.
    Up,
    /// Pointer left the surface.
    Leave,
}
