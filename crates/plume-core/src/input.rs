//! Pointer events feeding the sketchpad.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are screen coordinates; the sketchpad owns the conversion to
/// logical space. Events for one gesture arrive strictly ordered:
/// `Down`, zero or more `Move`s, then `Up` or `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button or touch contact went down.
    Down { position: Point },
    /// Pointer moved.
    Move { position: Point },
    /// Primary button or touch contact released.
    Up { position: Point },
    /// Wheel scrolled. The sign of `delta.y` picks the zoom direction:
    /// scrolling up (negative delta) zooms in at `position`.
    Scroll { position: Point, delta: Vec2 },
    /// Pointer left the surface. Ends a live gesture the same way `Up`
    /// does, at the last known position.
    Leave,
}

impl PointerEvent {
    /// The screen position carried by the event, if it has one.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Scroll { position, .. } => Some(*position),
            PointerEvent::Leave => None,
        }
    }
}
