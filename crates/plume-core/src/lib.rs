//! Plume Core Library
//!
//! Platform-agnostic engine for a freehand sketch surface: stroke capture,
//! snapshot undo/redo history, and the screen/logical viewport transform.
//! Rendering and export live in `plume-render`; toolbar widgets are the
//! host's concern and talk to the engine through plain setters and the
//! pointer-event dispatch on [`Sketchpad`].

pub mod camera;
pub mod history;
pub mod input;
pub mod sketch;
pub mod sketchpad;
pub mod starter;
pub mod stroke;
pub mod toolbox;

pub use camera::{Camera, WHEEL_ZOOM_STEP, ZOOM_STEP};
pub use history::{History, MAX_HISTORY};
pub use input::PointerEvent;
pub use sketch::Sketch;
pub use sketchpad::{Gesture, Sketchpad};
pub use stroke::{Color, Stroke, StrokeId, StrokeKind};
pub use toolbox::{ERASER_WIDTHS, PALETTE, PENCIL_WIDTHS, Tool, Toolbox};
